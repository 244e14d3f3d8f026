//! Creature lookup command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use dex_core::models::{ability_display_name, CreatureRecord, LookupKey, SpeciesInfo, SpriteVariant};
use dex_core::viewer::NOT_FOUND_TITLE;
use dex_core::{CatalogueCache, HttpCatalogue};

use crate::cli::output::{
    print_error, print_key_value, print_section, print_success, print_title, print_warning,
    spinner,
};

/// Looks a creature up, reporting a miss the way the TUI does.
async fn lookup(
    cache: &mut CatalogueCache<HttpCatalogue>,
    input: &str,
) -> Result<Arc<CreatureRecord>> {
    let key: LookupKey = input.parse()?;

    let progress = spinner(format!("Fetching {}...", key));
    let result = cache.fetch(&key).await;
    progress.finish_and_clear();

    result.inspect_err(|_| print_error(NOT_FOUND_TITLE)).map_err(Into::into)
}

/// `pokedex show <key>`
pub async fn show(catalogue: HttpCatalogue, input: &str, shiny: bool) -> Result<()> {
    let mut cache = CatalogueCache::new(catalogue);
    let record = lookup(&mut cache, input).await?;
    let variant = SpriteVariant::from_shiny(shiny);

    let species = match cache.species(&record).await {
        Ok(species) => Some(species),
        Err(e) => {
            tracing::debug!("Species lookup for {} failed: {}", record.name, e);
            print_warning(&format!("Species details unavailable: {}", e));
            None
        }
    };

    print_record(&record, variant, species.as_ref());
    Ok(())
}

/// `pokedex species <key>`
pub async fn species(catalogue: HttpCatalogue, input: &str) -> Result<()> {
    let mut cache = CatalogueCache::new(catalogue);
    let record = lookup(&mut cache, input).await?;

    let species = cache
        .species(&record)
        .await
        .with_context(|| format!("Failed to fetch species data for {}", record.name))?;

    print_title(&record.display_name());
    print_key_value("Species", &species.genus);
    println!();
    println!("{}", species.description);
    Ok(())
}

/// `pokedex sprite <key>`
pub async fn sprite(
    catalogue: HttpCatalogue,
    input: &str,
    shiny: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut cache = CatalogueCache::new(catalogue);
    let record = lookup(&mut cache, input).await?;
    let variant = SpriteVariant::from_shiny(shiny);

    let progress = spinner(format!("Downloading {} sprite...", variant));
    let bytes = cache.sprite(&record, variant).await;
    progress.finish_and_clear();
    let bytes = bytes.with_context(|| format!("Error loading image for {}", record.name))?;

    let path = output.unwrap_or_else(|| default_sprite_path(&record, variant));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    print_success(&format!(
        "Saved {} ({} bytes) to {}",
        record.display_name(),
        bytes.len(),
        path.display()
    ));
    Ok(())
}

fn default_sprite_path(record: &CreatureRecord, variant: SpriteVariant) -> PathBuf {
    match variant {
        SpriteVariant::Default => PathBuf::from(format!("{}.png", record.name)),
        SpriteVariant::Shiny => PathBuf::from(format!("{}-shiny.png", record.name)),
    }
}

fn print_record(record: &CreatureRecord, variant: SpriteVariant, species: Option<&SpeciesInfo>) {
    let title = match variant {
        SpriteVariant::Shiny => format!("SHINY {}", record.display_name()),
        SpriteVariant::Default => record.display_name(),
    };
    print_title(&title);
    println!();

    print_key_value("ID", &record.id.to_string());
    print_key_value("Types", &record.types.join(" / ").to_uppercase());
    print_key_value("Height", &record.height_display());
    print_key_value("Weight", &record.weight_display());
    if let Some(species) = species {
        print_key_value("Species", &species.genus);
    }
    print_key_value("Sprite", record.sprite_url(variant).unwrap_or("none"));

    print_section("Abilities");
    for ability in &record.abilities {
        println!("  {}", ability_display_name(ability));
    }

    if let Some(species) = species {
        print_section("Description");
        println!("{}", species.description);
    }
}
