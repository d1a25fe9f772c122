//! Integration tests that compile and run the generated Go code.
//!
//! Each test writes the generated files plus a small `main.go` exercising
//! them into a temporary module and runs `go run .`. Tests are skipped when
//! no Go toolchain is on the PATH.

use std::{path::Path, process::Command};

use genbuilder_codegen_go::{Generator, LanguageCodegen};
use genbuilder_core::{Import, TypeSpec};
use tempfile::TempDir;

fn go_available() -> bool {
    Command::new("go")
        .arg("version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Generate `types` into package main next to `main_go`, then run it.
fn assert_generated_code_runs(types: &[TypeSpec], main_go: &str) {
    if !go_available() {
        eprintln!("skipping: go toolchain not found");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();

    Generator::new(types, "main")
        .generate(dir)
        .expect("Failed to generate code");
    std::fs::write(dir.join("go.mod"), "module genbuildercheck\n\ngo 1.21\n")
        .expect("Failed to write go.mod");
    std::fs::write(dir.join("main.go"), main_go).expect("Failed to write main.go");

    let output = Command::new("go")
        .args(["run", "."])
        .current_dir(dir)
        .output()
        .expect("Failed to run go");

    if !output.status.success() {
        eprintln!("\n=== Generated files ===");
        print_generated_files(dir);
        panic!(
            "Generated code failed!\n\nstdout:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");
}

/// Print all generated Go files for debugging
fn print_generated_files(dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "go") {
            eprintln!("{}", path.display());
            if let Ok(content) = std::fs::read_to_string(&path) {
                for line in content.lines() {
                    eprintln!("  | {}", line);
                }
            }
        }
    }
}

#[test]
fn test_jason_round_trip() {
    let jason = TypeSpec::new("Jason")
        .import(Import::new("time"))
        .import(Import::new("io"))
        .field("t", "time.Time")
        .field("boolean", "bool")
        .field("floater", "float64")
        .field("reader", "io.Reader")
        .field("integer", "int")
        .field("integer32", "int32")
        .field("integer64", "int64");

    assert_generated_code_runs(
        &[jason],
        r#"package main

import (
	"fmt"
	"os"
	"strings"
	"time"
)

func fail(msg string) {
	fmt.Println(msg)
	os.Exit(1)
}

func main() {
	reader := strings.NewReader("payload")
	v := NewJasonBuilder().
		SetT(time.Unix(42, 0)).
		SetBoolean(true).
		SetFloater(1.5).
		SetReader(reader).
		SetInteger(1).
		SetInteger32(2).
		SetInteger64(3).
		SetInteger(7).
		Build()

	if v.Integer() != 7 {
		fail("last setter call should win")
	}
	if v.T() != time.Unix(42, 0) || !v.Boolean() || v.Floater() != 1.5 {
		fail("getters returned unexpected values")
	}
	if v.Reader() != reader || v.Integer32() != 2 || v.Integer64() != 3 {
		fail("getters returned unexpected values")
	}
	if back := v.AsBuilder().Build(); *back != *v {
		fail("AsBuilder().Build() changed the value")
	}
	if *NewJasonBuilder().Build() != *NewJason() {
		fail("zero builder should build the zero value")
	}
	fmt.Println("ok")
}
"#,
    );
}

#[test]
fn test_multiple_types_and_edge_cases_compile() {
    let types = [
        TypeSpec::new("Empty"),
        TypeSpec::new("Vec2").field("v", "float64").field("w", "float64"),
        TypeSpec::new("Bag")
            .field("items", "[]string")
            .field("index", "map[string]int")
            .field("next", "*Bag")
            .field("callback", "func(int) error"),
    ];

    assert_generated_code_runs(
        &types,
        r#"package main

import "fmt"

func main() {
	_ = NewEmpty().AsBuilder().Build()

	v := NewVec2Builder().SetV(1).SetW(2).Build()
	if v.V() != 1 || v.W() != 2 {
		fmt.Println("setter parameter shadowed the receiver")
		return
	}

	b := NewBagBuilder().SetItems([]string{"a"}).SetNext(NewBag()).Build()
	if len(b.AsBuilder().Build().Items()) != 1 || b.Next() == nil {
		fmt.Println("round trip lost data")
		return
	}
	fmt.Println("ok")
}
"#,
    );
}
