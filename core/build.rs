use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    collection: Option<String>,
    chapters: Vec<ChapterEntry>,
}

#[derive(Deserialize)]
struct ChapterEntry {
    category: String,
    category_ja: String,
    designs: Vec<DesignEntry>,
}

#[derive(Deserialize)]
struct DesignEntry {
    name: String,
    designer: String,
    style: String,
    stack: String,
    palette: String,
    image: String,
    code: String,
    description: String,
}

const DEFAULT_COLLECTION: &str = "2026 S/S";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=ATELIER_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read swatch catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse swatch catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.chapters.is_empty() {
        panic!("swatch catalog {} has no chapters", catalog_path.display());
    }

    validate_chapters(&catalog.chapters, &catalog_path);

    let collection = catalog
        .collection
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_COLLECTION);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const COLLECTION_LABEL: &str = {};",
        rust_string(collection)
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const CHAPTERS: &[Chapter] = &[").unwrap();

    for chapter in &catalog.chapters {
        writeln!(&mut output, "    Chapter {{").unwrap();
        writeln!(
            &mut output,
            "        category: {},",
            rust_string(&chapter.category)
        )
        .unwrap();
        writeln!(
            &mut output,
            "        category_ja: {},",
            rust_string(&chapter.category_ja)
        )
        .unwrap();
        writeln!(&mut output, "        designs: &[").unwrap();
        for design in &chapter.designs {
            writeln!(&mut output, "            DesignRecord {{").unwrap();
            write_field(&mut output, "name", &design.name);
            write_field(&mut output, "designer", &design.designer);
            write_field(&mut output, "style", &design.style);
            write_field(&mut output, "stack", &design.stack);
            write_field(&mut output, "palette", &design.palette);
            write_field(&mut output, "image", &design.image);
            write_field(&mut output, "code", &design.code);
            write_field(&mut output, "description", &design.description);
            writeln!(&mut output, "            }},").unwrap();
        }
        writeln!(&mut output, "        ],").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("swatch_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("ATELIER_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("swatches/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn write_field(output: &mut String, field: &str, value: &str) {
    writeln!(output, "                {field}: {},", rust_string(value)).unwrap();
}

fn validate_chapters(chapters: &[ChapterEntry], catalog_path: &Path) {
    let mut categories = HashSet::new();
    let mut codes = HashSet::new();

    for chapter in chapters {
        if chapter.category.trim().is_empty() {
            panic!("chapter category cannot be empty in {}", catalog_path.display());
        }
        if !categories.insert(chapter.category.clone()) {
            panic!(
                "duplicate chapter category '{}' in {}",
                chapter.category,
                catalog_path.display()
            );
        }
        if chapter.designs.is_empty() {
            panic!(
                "chapter '{}' has no designs in {}",
                chapter.category,
                catalog_path.display()
            );
        }
        for design in &chapter.designs {
            if design.code.trim().is_empty() {
                panic!(
                    "design '{}' has an empty code in {}",
                    design.name,
                    catalog_path.display()
                );
            }
            if design.image.starts_with("http://") || design.image.starts_with("https://") {
                panic!(
                    "design '{}' image cannot be a URL in {}",
                    design.code,
                    catalog_path.display()
                );
            }
            if design.image.starts_with("data:") {
                panic!(
                    "design '{}' image cannot be a data URL in {}",
                    design.code,
                    catalog_path.display()
                );
            }
            if !codes.insert(design.code.clone()) {
                panic!(
                    "duplicate design code '{}' in {}",
                    design.code,
                    catalog_path.display()
                );
            }
        }
    }
}
