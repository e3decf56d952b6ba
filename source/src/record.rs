use serde::{Serialize, Serializer};

/// эмодзи или последовательность эмодзи
///
/// не каждый эмодзи - один кодпоинт: например, "черный кот" - это кот, ZWJ и черный квадрат
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmojiRecord
{
    /// эмодзи или последовательность (например, 😀)
    pub grapheme: String,
    /// кодпоинты графемы (например, [U+1F600])
    #[serde(serialize_with = "serialize_codes")]
    pub codes: Vec<char>,
    /// название (например, "grinning face")
    pub name: String,
    /// группа (например, "Smileys & Emotion")
    pub group: String,
    /// подгруппа (например, "face-smiling")
    pub subgroup: String,
    /// теги из data.json (например, "happy", "smile")
    pub tags: Vec<String>,
}

impl EmojiRecord
{
    /// кодпоинты в числовом виде
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_
    {
        self.codes.iter().map(|&c| u32::from(c))
    }
}

/// кодпоинты пишем числами, а не строками из одного символа
fn serialize_codes<S: Serializer>(codes: &[char], serializer: S) -> Result<S::Ok, S::Error>
{
    serializer.collect_seq(codes.iter().map(|&c| u32::from(c)))
}
