// File: src/persistence.rs
use crate::core::counter::PhraseCounter;
use crate::core::engine::CharacterFinder;
use crate::core::vocabulary::Vocabulary;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// The serializable state of a curation session.
/// Groups are rebuilt on demand, so only the vocabulary and counter are kept.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    vocabulary: Vocabulary,
    counter: PhraseCounter,
}

pub fn save_to_disk(finder: &CharacterFinder, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        vocabulary: finder.vocabulary.clone(),
        counter: finder.counter.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(temp_file.as_file());
    bincode::serialize_into(&mut writer, &state)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path)?;
    info!(path = %path.display(), phrases = state.counter.len(), "saved counter snapshot");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<CharacterFinder> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    info!(path = %path.display(), phrases = state.counter.len(), "loaded counter snapshot");
    Ok(CharacterFinder::restore(state.vocabulary, state.counter))
}
