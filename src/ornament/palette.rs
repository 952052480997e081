use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
  Red,
  Amber,
  Yellow,
  Blue,
  Purple,
  Pink,
  Cyan,
  Emerald,
}

pub const PALETTE: [Color; 8] = [
  Color::Red,
  Color::Amber,
  Color::Yellow,
  Color::Blue,
  Color::Purple,
  Color::Pink,
  Color::Cyan,
  Color::Emerald,
];

impl Color {
  /// Pick a palette member from a uniform value in `[0, 1)`.
  pub fn from_uniform(u: f64) -> Self {
    let index = (u * PALETTE.len() as f64) as usize;
    PALETTE[index.min(PALETTE.len() - 1)]
  }

  pub fn hex(self) -> &'static str {
    match self {
      Color::Red => "#ef4444",
      Color::Amber => "#f59e0b",
      Color::Yellow => "#eab308",
      Color::Blue => "#3b82f6",
      Color::Purple => "#8b5cf6",
      Color::Pink => "#ec4899",
      Color::Cyan => "#06b6d4",
      Color::Emerald => "#10b981",
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.hex())
  }
}
