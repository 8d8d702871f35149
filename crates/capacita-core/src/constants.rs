//! Shared constants: flattened-text markers and compiled defaults.

/// Title given to the only section of a document parsed from empty text.
pub const DEFAULT_SECTION_TITLE: &str = "Conteúdo Principal";

/// Prefix for sections that carry no `## ` title line ("Seção 1", "Seção 2", ...).
pub const UNTITLED_SECTION_PREFIX: &str = "Seção";

/// Line prefix that opens a section title in flattened text.
pub const SECTION_TITLE_PREFIX: &str = "## ";

/// Line used both as section separator and as divider block.
pub const DIVIDER_LINE: &str = "---";

/// Separator emitted between serialized sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

pub const IMAGE_MARKER: &str = "[Imagem:";
pub const VIDEO_MARKER: &str = "[Vídeo:";

pub const LIST_BULLET: &str = "•";
pub const CHECKED_MARK: &str = "☑";
pub const UNCHECKED_MARK: &str = "☐";

/// Average reading speed used for duration estimates.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Annual discount applied when billing config does not override it.
pub const DEFAULT_ANNUAL_DISCOUNT_PERCENT: u32 = 15;

/// Plan catalog cache time-to-live.
pub const DEFAULT_CATALOG_TTL_SECONDS: u64 = 300;

pub const DEFAULT_CURRENCY: &str = "BRL";

/// Months billed in an annual subscription.
pub const MONTHS_PER_YEAR: f64 = 12.0;
