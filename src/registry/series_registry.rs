use {
    crate::{
        config::DF,
        domain::{Scale, SeriesColor, SeriesData, SeriesId, SeriesSample, TimeKey, TimeRange},
    },
    std::{collections::HashMap, error::Error, fmt},
};

/// Everything the renderer needs to know about a series apart from its points.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesHandle {
    pub id: SeriesId,
    pub scale: Scale,
    /// Palette color; only indicator lines get one.
    pub color: Option<SeriesColor>,
}

#[derive(Debug)]
pub enum RegistryError {
    DuplicateIdentity { key: String, generation: u64 },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistryError::DuplicateIdentity { key, generation } => write!(
                f,
                "Series '{}' registered twice in generation {}",
                key, generation
            ),
        }
    }
}

impl Error for RegistryError {}

#[derive(Debug, Clone)]
struct Entry {
    handle: SeriesHandle,
    data: SeriesData,
}

/// Collects the series of one generation. `finish` seals it into a read-only `SeriesRegistry`.
#[derive(Debug)]
pub struct RegistryBuilder {
    generation: u64,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Rejects an identity already registered in this generation; the first registration is kept intact.
    pub fn register(
        &mut self,
        id: SeriesId,
        data: SeriesData,
        scale: Scale,
        color: Option<SeriesColor>,
    ) -> Result<&SeriesHandle, RegistryError> {
        let key = id.key();
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateIdentity {
                key,
                generation: self.generation,
            });
        }

        if DF.log_registry {
            log::info!(
                "gen {}: registered '{}' ({} points, {} scale, color {:?})",
                self.generation,
                key,
                data.len(),
                scale,
                color.map(SeriesColor::hex)
            );
        }

        let idx = self.entries.len();
        self.index.insert(key, idx);
        self.entries.push(Entry {
            handle: SeriesHandle { id, scale, color },
            data,
        });
        Ok(&self.entries[idx].handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> SeriesRegistry {
        SeriesRegistry {
            generation: self.generation,
            entries: self.entries,
            index: self.index,
        }
    }
}

/// All renderable series of one payload generation, in registration order.
/// Never mutated once built; a new payload produces a new registry.
#[derive(Debug, Clone)]
pub struct SeriesRegistry {
    generation: u64,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl SeriesRegistry {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, id: &SeriesId) -> Option<&SeriesHandle> {
        self.resolve_key(&id.key())
    }

    pub fn resolve_key(&self, key: &str) -> Option<&SeriesHandle> {
        self.index.get(key).map(|&idx| &self.entries[idx].handle)
    }

    pub fn data(&self, id: &SeriesId) -> Option<&SeriesData> {
        self.index.get(&id.key()).map(|&idx| &self.entries[idx].data)
    }

    /// Registration order.
    pub fn all_identities(&self) -> impl Iterator<Item = &SeriesId> {
        self.entries.iter().map(|e| &e.handle.id)
    }

    /// Handles with their data, registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&SeriesHandle, &SeriesData)> {
        self.entries.iter().map(|e| (&e.handle, &e.data))
    }

    /// `Absent` both for unknown identities and for times the series has no point at.
    pub fn sample_at(&self, id: &SeriesId, time: TimeKey) -> SeriesSample {
        self.data(id)
            .map_or(SeriesSample::Absent, |data| data.sample_at(time))
    }

    /// First to last day across every registered series.
    pub fn time_extent(&self) -> Option<TimeRange> {
        self.entries
            .iter()
            .filter_map(|e| e.data.time_extent())
            .reduce(TimeRange::union)
    }
}
