use log::debug;

use crate::{EmojiRecord, TagIndex};

/// дополняем записи тегами
/// data.json - данные вспомогательные: если графемы там нет, список тегов остается пустым
pub fn merge(records: Vec<EmojiRecord>, index: &TagIndex) -> Vec<EmojiRecord>
{
    records
        .into_iter()
        .map(|record| {
            let tags = match index.get(&record.grapheme) {
                Some(tags) => tags.to_vec(),
                None => {
                    debug!("нет тегов: {} ({})", record.grapheme, record.name);
                    vec![]
                }
            };

            EmojiRecord { tags, ..record }
        })
        .collect()
}
