use {
  super::Ornament,
  crate::{
    error::{ErrorKind, Result},
    solver::Placement
  },
  anyhow::bail,
  log::debug,
  std::sync::Arc
};

/// Replace the text of the ornament with the given `id`.
///
/// Returns a new collection; every other ornament, and every other field, is carried over
/// unchanged. An unknown `id` yields a collection equal to the input.
pub fn update(collection: &[Ornament], id: usize, text: &str) -> Arc<[Ornament]> {
  collection.iter()
    .map(|ornament| if ornament.id() == id {
      ornament.with_text(text)
    } else {
      ornament.clone()
    })
    .collect()
}

/// Owner of a generated layout. Label updates are its only mutation.
///
/// Every update swaps in a fresh collection, so a [`snapshot`](Self::snapshot) taken earlier
/// keeps observing the state it was taken from.
#[derive(Debug, Clone)]
pub struct OrnamentStore {
  ornaments: Arc<[Ornament]>
}

impl OrnamentStore {
  pub fn new(ornaments: Vec<Ornament>) -> Self {
    Self { ornaments: ornaments.into() }
  }

  pub fn snapshot(&self) -> Arc<[Ornament]> {
    Arc::clone(&self.ornaments)
  }

  /// Generated layouts keep ids equal to positions, so that slot is tried first; any other
  /// collection falls back to a scan.
  pub fn get(&self, id: usize) -> Option<&Ornament> {
    self.ornaments.get(id)
      .filter(|ornament| ornament.id() == id)
      .or_else(|| self.ornaments.iter().find(|ornament| ornament.id() == id))
  }

  pub fn iter(&self) -> impl Iterator<Item = &Ornament> + '_ {
    self.ornaments.iter()
  }

  pub fn labeled(&self) -> impl Iterator<Item = &Ornament> + '_ {
    self.iter().filter(|ornament| !ornament.text().is_empty())
  }

  pub fn len(&self) -> usize {
    self.ornaments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ornaments.is_empty()
  }

  /// Set the label of one ornament. Unknown ids are ignored.
  pub fn update_text(&mut self, id: usize, text: impl AsRef<str>) {
    if self.get(id).is_none() {
      debug!("ignoring label update for unknown ornament {}", id);
      return;
    }
    self.ornaments = update(&self.ornaments, id, text.as_ref());
  }

  /// Like [`update_text`](Self::update_text), but reports an unknown id.
  pub fn try_update_text(&mut self, id: usize, text: impl AsRef<str>) -> Result<()> {
    if self.get(id).is_none() {
      bail!(ErrorKind::UnknownOrnament(id));
    }
    self.ornaments = update(&self.ornaments, id, text.as_ref());
    Ok(())
  }
}

impl From<Vec<Ornament>> for OrnamentStore {
  fn from(ornaments: Vec<Ornament>) -> Self {
    Self::new(ornaments)
  }
}

impl From<Placement> for OrnamentStore {
  fn from(placement: Placement) -> Self {
    Self::new(placement.ornaments)
  }
}
