mod utils;

use mbtext::{parse_copyright_notice, CopyrightItem, Year};
use utils::read_sample_file_lines;

const TYPES: [&str; 7] = [
    "©",
    "℗",
    "licensed from",
    "licensed to",
    "distributed by",
    "marketed by",
    "manufactured by",
];

#[test]
fn samples_are_well_formed() {
    let mut found = 0;

    for line in read_sample_file_lines("sample_notices.txt") {
        for item in parse_copyright_notice(&line) {
            assert!(!item.name.is_empty(), "{line:?}");
            assert_eq!(item.name, item.name.trim(), "{line:?}");
            assert!(!item.types.is_empty(), "{line:?}");
            assert!(
                item.types.iter().all(|t| TYPES.contains(&t.as_str())),
                "{line:?}: {:?}",
                item.types
            );

            let years = match &item.year {
                None => vec![],
                Some(Year::Single(year)) => vec![year.clone()],
                Some(Year::Multiple(years)) => years.clone(),
            };
            assert!(
                years
                    .iter()
                    .all(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())),
                "{line:?}: {years:?}"
            );

            found += 1;
        }
    }

    assert!(found > 0);
}

#[test]
fn mixed_notice() {
    assert_eq!(
        parse_copyright_notice("(C) 1999 Foo Music, (P) 2000 Bar Records Ltd."),
        [
            CopyrightItem {
                name: "Foo Music".to_owned(),
                types: vec!["©".to_owned()],
                year: Some(Year::Single("1999".to_owned())),
            },
            CopyrightItem {
                name: "Bar Records Ltd.".to_owned(),
                types: vec!["℗".to_owned()],
                year: Some(Year::Single("2000".to_owned())),
            },
        ]
    );
}

#[test]
fn not_a_notice() {
    assert!(parse_copyright_notice("All rights reserved. Unauthorized copying prohibited.")
        .is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serializes_to_json() {
    let items = parse_copyright_notice(
        "℗ 2014 & 2020 Foo Records under exclusive license to Bar Music",
    );

    assert_eq!(
        serde_json::to_string(&items).unwrap(),
        r#"[{"name":"Foo Records","types":["℗"],"year":["2014","2020"]},{"name":"Bar Music","types":["licensed to"]}]"#
    );
}
