use std::collections::BTreeSet;

use emoji_catalog_source::EmojiRecord;

/// набор токенов для поиска, упорядочен лексикографически
pub type TokenSet = BTreeSet<String>;

/// разбить строки на токены
///
/// например, ["Foo bar", "moo-cow"] дают ["bar", "cow", "foo", "moo"].
/// точки удаляются до разбиения, поэтому "e.g." превращается в "eg"
pub fn tokenize<I, S>(inputs: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = TokenSet::new();

    for input in inputs {
        let input = input.as_ref().to_lowercase().replace('.', "");

        tokens.extend(
            input
                .split(|c: char| !c.is_ascii_alphabetic())
                .filter(|word| !word.is_empty())
                .map(str::to_owned),
        );
    }

    tokens
}

/// токены эмодзи: теги, название, группа и подгруппа
pub fn record_tokens(record: &EmojiRecord) -> TokenSet
{
    let fields = [&record.name, &record.group, &record.subgroup];

    tokenize(record.tags.iter().chain(fields))
}

/// поисковый индекс: графема -> токены, в порядке записей каталога
pub fn search_index(records: &[EmojiRecord]) -> Vec<(&str, TokenSet)>
{
    records
        .iter()
        .map(|record| (record.grapheme.as_str(), record_tokens(record)))
        .collect()
}
