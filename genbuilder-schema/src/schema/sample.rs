/// Starter schema: the `Jason` value type with one field of each common kind.
pub const SAMPLE_SCHEMA: &str = r#"# genbuilder schema
#
# Each [[types]] entry produces <name>builder.go and <name>.go in [output].dir.

[output]
dir = "builders"
# package = "builders"  # defaults to the last segment of dir

[formatter]
enabled = true
command = "goimports"
args = ["-w"]

[[types]]
name = "Jason"
imports = ["time", "io"]
fields = [
  { name = "t", type = "time.Time" },
  { name = "boolean", type = "bool" },
  { name = "floater", type = "float64" },
  { name = "reader", type = "io.Reader" },
  { name = "integer", type = "int" },
  { name = "integer32", type = "int32" },
  { name = "integer64", type = "int64" },
]
"#;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Schema;

    #[test]
    fn test_sample_is_valid() {
        let schema = Schema::from_str(SAMPLE_SCHEMA).expect("sample schema is valid");
        assert_eq!(schema.package_name().as_deref(), Some("builders"));

        let jason = &schema.types[0];
        assert_eq!(jason.name, "Jason");
        let names: Vec<_> = jason.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["t", "boolean", "floater", "reader", "integer", "integer32", "integer64"]
        );
    }
}
