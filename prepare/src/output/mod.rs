use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use emoji_catalog_source::EmojiRecord;
use log::warn;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::tokens::TokenSet;
use crate::Catalog;

use self::format::format_str_vec;

mod format;
pub mod stats;

/// отступ в emojis.json
const JSON_INDENT: &[u8] = b"    ";

/// заголовок сгенерированной таблицы
const TABLE_HEADER: &str = "// Сгенерировано из emoji-test.txt (https://unicode.org/Public/emoji/) и data.json.\n\
                            // Не редактировать вручную.\n";

/// подготовленные к записи файлы
pub struct Artifacts
{
    /// каталог, emojis.json
    pub json: Vec<u8>,
    /// таблица токенов, emojis.rs
    pub table: Vec<u8>,
}

impl Artifacts
{
    /// записать оба файла
    ///
    /// если таблицу записать не удалось, уже записанный emojis.json удаляется
    pub fn write(&self, json_path: &Path, table_path: &Path) -> anyhow::Result<()>
    {
        fs::write(json_path, &self.json).with_context(|| format!("не удалось записать {}", json_path.display()))?;

        if let Err(error) = fs::write(table_path, &self.table) {
            if let Err(remove_error) = fs::remove_file(json_path) {
                warn!("не удалось удалить {}: {}", json_path.display(), remove_error);
            }

            return Err(error).with_context(|| format!("не удалось записать {}", table_path.display()));
        }

        Ok(())
    }
}

/// сформировать оба файла в памяти
pub fn render(catalog: &Catalog) -> anyhow::Result<Artifacts>
{
    let mut json = vec![];
    write_json(&catalog.emojis, &mut json).context("не удалось сериализовать каталог")?;
    json.push(b'\n');

    let mut table = vec![];
    write_table(&catalog.search_index(), &mut table)?;

    Ok(Artifacts { json, table })
}

/// каталог в виде JSON-массива записей
pub fn write_json<W: Write>(emojis: &[EmojiRecord], writer: W) -> serde_json::Result<()>
{
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(JSON_INDENT));

    emojis.serialize(&mut serializer)
}

/// поисковый индекс в виде таблицы на Rust:
///
/// pub const EMOJIS: &[(&str, &[&str])] = &[
///     ("😀", &["emotion", "face", ...]),
/// ];
pub fn write_table<W: Write>(index: &[(&str, TokenSet)], writer: &mut W) -> io::Result<()>
{
    writeln!(writer, "{}", TABLE_HEADER)?;
    writeln!(writer, "pub const EMOJIS: &[(&str, &[&str])] = &[")?;

    for (grapheme, tokens) in index {
        writeln!(writer, "    ({:?}, &[{}]),", grapheme, format_str_vec(tokens))?;
    }

    writeln!(writer, "];")
}
