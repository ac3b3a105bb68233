mod utils;

use mbtext::{
    guess_unicode_punctuation, guess_unicode_punctuation_preserving_markup, Locale,
};
use utils::read_sample_file_lines;

fn locales() -> impl Iterator<Item = Option<&'static str>> {
    [None, Some("xx")]
        .into_iter()
        .chain(Locale::ALL.into_iter().map(|locale| Some(locale.code())))
}

#[test]
fn idempotent_over_samples() {
    let lines = read_sample_file_lines("sample_titles.txt");

    for locale in locales() {
        for line in &lines {
            let once = guess_unicode_punctuation(line, locale);
            let twice = guess_unicode_punctuation(&once, locale);

            assert_eq!(once, twice, "{line:?} with locale {locale:?}");

            let once = guess_unicode_punctuation_preserving_markup(line, locale);
            let twice = guess_unicode_punctuation_preserving_markup(&once, locale);

            assert_eq!(once, twice, "{line:?} with markup and locale {locale:?}");
        }
    }
}

#[test]
fn markup_variant_matches_plain_text() {
    let lines = read_sample_file_lines("sample_titles.txt");

    for line in lines
        .iter()
        .filter(|line| !line.contains("://") && !line.contains("''"))
    {
        assert_eq!(
            guess_unicode_punctuation_preserving_markup(line, None),
            guess_unicode_punctuation(line, None),
            "{line:?}"
        );
    }
}

#[test]
fn samples() {
    for (text, expected) in [
        ("Rock 'n' Roll Music", "Rock ’n’ Roll Music"),
        ("Interlude (3'42\")", "Interlude (3′42″)"),
        ("Live at the Fillmore, 1968-03-07", "Live at the Fillmore, 1968‐03‐07"),
        ("Jay-Z - 'Allo 'Allo", "Jay‐Z – ’Allo ’Allo"),
        (
            "It's the 'end' of the world as we know it...",
            "It’s the ‘end’ of the world as we know it…",
        ),
    ] {
        assert_eq!(guess_unicode_punctuation(text, Some("en")), expected);
    }
}

#[test]
fn markup_sample() {
    assert_eq!(
        guess_unicode_punctuation_preserving_markup(
            "[https://example.com/rock-'n'-roll|Rock 'n' Roll] - '''bold''' and ''italic''",
            None
        ),
        "[https://example.com/rock-'n'-roll|Rock ’n’ Roll] – '''bold''' and ''italic''"
    );
}
