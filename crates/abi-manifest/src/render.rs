//! Rendering the ABI table as Rust source.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::artifact::collect_abis;
use crate::error::ManifestError;

/// Name of the generated file inside the output directory.
pub const OUTPUT_FILE: &str = "gen_abis.rs";

/// Wrap `s` in a raw string literal with enough `#`s that no `"#...` run in
/// the content can close it early.
fn raw_string_literal(s: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in s.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => {
                longest = longest.max(n + 1);
                Some(n + 1)
            }
            _ => None,
        };
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{s}\"{hashes}")
}

/// Render the generated module for `abis`, stamped with `generated_at`.
///
/// Entries come out sorted by contract name, so the output only depends on
/// the inputs and the timestamp.
pub fn render_table(abis: &BTreeMap<String, String>, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("// Code generated by abi-manifest; DO NOT EDIT.\n");
    out.push_str(&format!(
        "// {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str("use std::sync::OnceLock;\n\n");
    out.push_str("use abi_manifest::AbiTable;\n\n");

    out.push_str("/// Raw ABI JSON by contract name, sorted by name.\n");
    out.push_str("pub static RAW_ABIS: &[(&str, &str)] = &[\n");
    for (name, abi) in abis {
        out.push_str(&format!("    // {} ABI\n", name));
        out.push_str(&format!("    ({:?}, {}),\n", name, raw_string_literal(abi)));
    }
    out.push_str("];\n\n");

    out.push_str("/// Parsed ABI table, built on first use.\n");
    out.push_str("pub fn abis() -> &'static AbiTable {\n");
    out.push_str("    static TABLE: OnceLock<AbiTable> = OnceLock::new();\n");
    out.push_str("    TABLE.get_or_init(|| {\n");
    out.push_str("        AbiTable::from_entries(RAW_ABIS).expect(\"generated ABI table is valid\")\n");
    out.push_str("    })\n");
    out.push_str("}\n");
    out
}

/// Collect every contract ABI from `build_dir` and write
/// `<out_dir>/gen_abis.rs`. Nothing is written if any artifact fails.
pub fn generate(build_dir: &Path, out_dir: &Path) -> Result<PathBuf, ManifestError> {
    let out_path = out_dir.join(OUTPUT_FILE);
    info!(
        build_dir = %build_dir.display(),
        output = %out_path.display(),
        "generating ABI table"
    );

    let abis = collect_abis(build_dir)?;
    let source = render_table(&abis, Utc::now());

    let write_err = |source| ManifestError::Write {
        path: out_path.clone(),
        source,
    };
    let temp_path = out_path.with_extension("rs.tmp");
    fs::write(&temp_path, source).map_err(write_err)?;
    fs::rename(&temp_path, &out_path).map_err(write_err)?;

    info!(contracts = abis.len(), "wrote ABI table");
    Ok(out_path)
}
