//! Positional template formatting
//!
//! Templates use indexed placeholders: `{0}`, `{1}`, ... with `{{` and `}}`
//! as escaped braces. Alignment and format specifiers (`{0,10}`, `{0:D}`) are
//! accepted and ignored: every argument is already rendered text.

/// Why a template could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A `{` has no matching `}`.
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },

    /// A `}` appears outside a placeholder and is not escaped.
    #[error("unexpected '}}' at byte {position}")]
    UnexpectedClosingBrace { position: usize },

    /// A placeholder does not start with an argument index.
    #[error("invalid placeholder at byte {position}")]
    InvalidPlaceholder { position: usize },

    /// A placeholder refers to a missing argument.
    #[error("placeholder {{{index}}} refers to a missing argument ({available} given)")]
    IndexOutOfRange { index: usize, available: usize },
}

/// Result of formatting a caller-supplied description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Placeholders were substituted.
    Formatted(String),
    /// The template was malformed and is used verbatim.
    Literal(String),
}

impl FormatOutcome {
    /// Formats `template`, falling back to the template text on failure.
    pub fn of(template: &str, args: &[&str]) -> Self {
        match format_template(template, args) {
            Ok(text) => Self::Formatted(text),
            Err(error) => {
                tracing::warn!(%error, template, "malformed condition description; using it verbatim");
                Self::Literal(template.to_owned())
            }
        }
    }

    /// Returns `true` if the template was used verbatim.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The resulting text.
    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(text) | Self::Literal(text) => text,
        }
    }
}

/// Substitutes `args` into `template`.
///
/// # Examples
///
/// ```rust
/// use nebula_conditions::engine::format_template;
///
/// assert_eq!(format_template("{0} > {1}", &["x", "3"]).unwrap(), "x > 3");
/// assert_eq!(format_template("{{{0}}}", &["x"]).unwrap(), "{x}");
/// assert!(format_template("{0", &["x"]).is_err());
/// ```
pub fn format_template(template: &str, args: &[&str]) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                out.push_str(&template[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                out.push_str(&template[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'}' => return Err(FormatError::UnexpectedClosingBrace { position: i }),
            b'{' => {
                out.push_str(&template[literal_start..i]);
                let (index, end) = parse_placeholder(bytes, i)?;
                let arg = args.get(index).ok_or(FormatError::IndexOutOfRange {
                    index,
                    available: args.len(),
                })?;
                out.push_str(arg);
                i = end + 1;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    out.push_str(&template[literal_start..]);
    Ok(out)
}

// Parses `{index[,alignment][:format]}` at `start`; returns the index and the
// position of the closing brace. The index must follow `{` directly; spaces
// are allowed only after it.
fn parse_placeholder(bytes: &[u8], start: usize) -> Result<(usize, usize), FormatError> {
    let mut i = start + 1;
    let digits_start = i;
    let mut index: usize = 0;
    while let Some(digit) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        index = index
            .checked_mul(10)
            .and_then(|n| n.checked_add(usize::from(digit - b'0')))
            .ok_or(FormatError::InvalidPlaceholder { position: start })?;
        i += 1;
    }
    if i == digits_start {
        return match bytes.get(i) {
            None => Err(FormatError::UnclosedPlaceholder { position: start }),
            Some(_) => Err(FormatError::InvalidPlaceholder { position: start }),
        };
    }

    while bytes.get(i) == Some(&b' ') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'}') => Ok((index, i)),
        Some(b',' | b':') => {
            let close = bytes[i..]
                .iter()
                .position(|&b| b == b'}')
                .ok_or(FormatError::UnclosedPlaceholder { position: start })?;
            Ok((index, i + close))
        }
        Some(_) => Err(FormatError::InvalidPlaceholder { position: start }),
        None => Err(FormatError::UnclosedPlaceholder { position: start }),
    }
}
