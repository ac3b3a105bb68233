use std::{fs, path::Path};

use mbtext::RuleTable;

/// Read sample file into string
pub fn read_sample_file(name: &str) -> String {
    fs::read_to_string(Path::new("tests").join(name)).unwrap()
}

/// Read sample lines and filter junk
pub fn read_sample_file_lines(name: &str) -> Vec<String> {
    read_sample_file(name)
        .lines()
        .filter(|&l| !l.trim().is_empty())
        .map(|s| s.to_owned())
        .collect()
}

/// Load every rule table from `demos` with given extension
#[allow(dead_code)]
pub fn read_demo_tables(
    extension: &str,
    parse: impl Fn(&str) -> Result<RuleTable, String>,
) -> Vec<(String, RuleTable)> {
    let mut tables = Vec::new();

    for entry in fs::read_dir("demos").unwrap() {
        let path = entry.unwrap().path();

        if !path.is_file() {
            continue;
        }

        if !path.extension().is_some_and(|ext| ext == extension) {
            continue;
        }

        let content = fs::read_to_string(&path).unwrap();
        let table = parse(&content)
            .unwrap_or_else(|err| panic!("parsing rules {}: {err}", path.display()));

        tables.push((path.display().to_string(), table));
    }

    tables
}
