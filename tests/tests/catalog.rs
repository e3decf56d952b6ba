use std::collections::BTreeSet;
use std::fs;

use emoji_catalog_prepare::output::render;
use emoji_catalog_prepare::{run, Args, Catalog, TokenSet};
use emoji_catalog_source::EmojiRecord;
use emoji_catalog_tests::data;

fn catalog() -> Catalog
{
    Catalog::build(&data::emoji_test(), &data::tag_data()).unwrap()
}

fn find<'a>(catalog: &'a Catalog, grapheme: &str) -> &'a EmojiRecord
{
    catalog
        .emojis
        .iter()
        .find(|e| e.grapheme == grapheme)
        .unwrap_or_else(|| panic!("{} нет в каталоге", grapheme))
}

fn tokens_of<'a>(index: &'a [(&str, TokenSet)], grapheme: &str) -> &'a TokenSet
{
    &index.iter().find(|(g, _)| *g == grapheme).unwrap().1
}

/// 😀 из emoji-test.txt + {"emoji":"😀","tags":["happy","smile"]}
#[test]
fn grinning_face()
{
    let catalog = catalog();

    assert_eq!(
        catalog.emojis[0],
        EmojiRecord {
            grapheme: "😀".to_owned(),
            codes: vec!['\u{1F600}'],
            name: "grinning face".to_owned(),
            group: "Smileys & Emotion".to_owned(),
            subgroup: "face-smiling".to_owned(),
            tags: vec!["happy".to_owned(), "smile".to_owned()],
        }
    );

    let index = catalog.search_index();
    let expected: BTreeSet<String> = ["emotion", "face", "grinning", "happy", "smile", "smiling", "smileys"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    assert_eq!(index[0].0, "😀");
    assert_eq!(index[0].1, expected);
}

#[test]
fn catalog_order()
{
    let catalog = catalog();

    let graphemes: Vec<&str> = catalog.emojis.iter().map(|e| e.grapheme.as_str()).collect();
    let indexed: Vec<&str> = catalog.search_index().iter().map(|(g, _)| *g).collect();

    assert_eq!(graphemes, indexed);
    assert_eq!(graphemes.len(), 12);
    assert_eq!(catalog.stats.accepted(), 12);
}

/// варианты цвета кожи наследуют теги базового эмодзи
#[test]
fn skin_tones()
{
    let catalog = catalog();

    assert_eq!(find(&catalog, "👋").tags, ["hand", "wave", "waving"]);
    assert_eq!(
        find(&catalog, "👋🏻").tags,
        ["hand", "wave", "waving", "light skin tone", "wave"]
    );
    assert_eq!(find(&catalog, "👋🏿").tags, ["hand", "wave", "waving", "dark skin tone"]);
    assert_eq!(find(&catalog, "🧑🏿").tags, ["person", "dark skin tone"]);

    let index = catalog.search_index();
    let tokens = tokens_of(&index, "👋🏻");

    assert!(tokens.contains("light"));
    assert!(tokens.contains("skin"));
    assert!(tokens.contains("tone"));
    assert!(tokens.contains("hand"));
    assert_eq!(tokens.iter().filter(|t| *t == "wave").count(), 1);
}

/// графемы без тегов остаются в каталоге
#[test]
fn untagged()
{
    let catalog = catalog();

    let untagged: Vec<&str> = catalog.untagged().map(|e| e.grapheme.as_str()).collect();

    // 👁️‍🗨️ в data.json тоже нет
    assert_eq!(untagged, vec!["😃", "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}"]);
    assert!(find(&catalog, "😃").tags.is_empty());

    let index = catalog.search_index();
    let tokens: Vec<&str> = tokens_of(&index, "😃").iter().map(String::as_str).collect();

    assert_eq!(
        tokens,
        vec!["big", "emotion", "eyes", "face", "grinning", "smileys", "smiling", "with"]
    );
}

/// компоненты и неполностью квалифицированные эмодзи не попадают в каталог, вместе с их тегами
#[test]
fn qualified_only()
{
    let catalog = catalog();

    for grapheme in ["☺", "🏻", "🏿", "#⃣", "👁‍🗨", "👁‍🗨️", "👁️‍🗨"] {
        assert!(catalog.emojis.iter().all(|e| e.grapheme != grapheme), "{}", grapheme);
    }

    assert!(catalog.emojis.iter().all(|e| e.group != "Component"));
}

#[test]
fn abbreviations()
{
    let catalog = catalog();
    let index = catalog.search_index();

    assert!(tokens_of(&index, "🇺🇸").contains("usa"));
    assert!(tokens_of(&index, "🇺🇸").contains("united"));
    assert!(tokens_of(&index, "☺️").contains("eg"));
    assert!(tokens_of(&index, "☺️").contains("content"));
    assert!(tokens_of(&index, "#️⃣").contains("keycap"));
}

/// повторный запуск дает побайтно одинаковый результат
#[test]
fn deterministic()
{
    let first = render(&catalog()).unwrap();
    let second = render(&catalog()).unwrap();

    assert_eq!(first.table, second.table);
    assert_eq!(first.json, second.json);

    let catalog = catalog();

    for (_, tokens) in catalog.search_index() {
        let tokens: Vec<&String> = tokens.iter().collect();
        let mut sorted = tokens.clone();
        sorted.sort();

        assert_eq!(tokens, sorted);
    }
}

#[test]
fn prepare_files()
{
    let dir = tempfile::tempdir().unwrap();

    let args = Args {
        emoji_test: data::test_data_dir().join("emoji-test.txt"),
        tags: data::test_data_dir().join("data.json"),
        json_out: dir.path().join("emojis.json"),
        table_out: dir.path().join("emojis.rs"),
        verbose: false,
    };

    run(&args).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.json_out).unwrap()).unwrap();
    let emojis = json.as_array().unwrap();

    assert_eq!(emojis.len(), 12);
    assert_eq!(emojis[3]["Grapheme"], "😮‍💨");
    assert_eq!(emojis[3]["Codes"], serde_json::json!([0x1F62E, 0x200D, 0x1F4A8]));
    assert_eq!(emojis[1]["Tags"], serde_json::json!([]));

    let table = fs::read_to_string(&args.table_out).unwrap();
    let rows: Vec<&str> = table.lines().filter(|l| l.starts_with("    (")).collect();

    assert_eq!(rows.len(), 12);
    assert!(rows[0].starts_with(r#"    ("😀", &["emotion", "face", "grinning", "happy", "#));
    assert!(table.trim_end().ends_with("];"));
}
