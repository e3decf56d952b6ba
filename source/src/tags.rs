use std::collections::HashMap;

use serde::Deserialize;

use crate::SourceError;

/// запись data.json
/// вложенные варианты цвета кожи имеют ту же форму, их собственные варианты игнорируются
#[derive(Debug, Deserialize)]
struct TagEntry
{
    emoji: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    skins: Vec<TagEntry>,
}

/// теги эмодзи, ключ - графема
#[derive(Debug, Default, Clone)]
pub struct TagIndex
{
    tags: HashMap<String, Vec<String>>,
}

impl TagIndex
{
    /// разбор data.json
    ///
    /// варианты цвета кожи получают теги базового эмодзи, а за ними - свои собственные.
    /// повторы не убираем, это дело токенизации
    pub fn from_json(data: &str) -> Result<Self, SourceError>
    {
        let entries: Vec<TagEntry> = serde_json::from_str(data)?;

        let mut tags = HashMap::with_capacity(entries.len());

        for entry in entries {
            tags.insert(entry.emoji, entry.tags.clone());

            for skin in entry.skins {
                let mut skin_tags = entry.tags.clone();
                skin_tags.extend(skin.tags);

                tags.insert(skin.emoji, skin_tags);
            }
        }

        Ok(Self { tags })
    }

    /// теги графемы, если она есть в data.json
    pub fn get(&self, grapheme: &str) -> Option<&[String]>
    {
        self.tags.get(grapheme).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize
    {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.tags.is_empty()
    }
}
