use log::{debug, info};

use crate::Catalog;

/// информация о собранном каталоге
pub fn print(catalog: &Catalog)
{
    let stats = &catalog.stats;

    info!(
        "эмодзи в каталоге: {}, графем с тегами в data.json: {}",
        catalog.emojis.len(),
        catalog.tagged_graphemes
    );

    for (qualification, count) in stats.qualifications.iter() {
        info!("  {}: {}", qualification, count);
    }

    let mut groups: Vec<&(String, usize)> = stats.groups.iter().collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    for (group, count) in groups {
        info!("  {}: {}", group, count);
    }

    let untagged: Vec<&str> = catalog.untagged().map(|e| e.grapheme.as_str()).collect();

    info!("без тегов: {}", untagged.len());

    if !untagged.is_empty() {
        debug!("  {}", untagged.join(" "));
    }
}
