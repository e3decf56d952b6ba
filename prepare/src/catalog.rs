use emoji_catalog_source::{merge, parse_emoji_test, EmojiRecord, ParseStats, SourceError, TagIndex};

use crate::tokens::{search_index, TokenSet};

/// каталог эмодзи: записи из emoji-test.txt, дополненные тегами из data.json
#[derive(Debug)]
pub struct Catalog
{
    /// записи в порядке следования в emoji-test.txt
    pub emojis: Vec<EmojiRecord>,
    /// статистика разбора emoji-test.txt
    pub stats: ParseStats,
    /// количество графем в data.json, включая варианты цвета кожи
    pub tagged_graphemes: usize,
}

impl Catalog
{
    pub fn build(emoji_test: &str, tag_data: &str) -> Result<Self, SourceError>
    {
        let mut stats = ParseStats::default();

        let records = parse_emoji_test(emoji_test, &mut stats)?;
        let tags = TagIndex::from_json(tag_data)?;

        Ok(Self {
            emojis: merge(records, &tags),
            stats,
            tagged_graphemes: tags.len(),
        })
    }

    pub fn search_index(&self) -> Vec<(&str, TokenSet)>
    {
        search_index(&self.emojis)
    }

    /// эмодзи, для которых в data.json не нашлось тегов
    pub fn untagged(&self) -> impl Iterator<Item = &EmojiRecord>
    {
        self.emojis.iter().filter(|e| e.tags.is_empty())
    }
}
