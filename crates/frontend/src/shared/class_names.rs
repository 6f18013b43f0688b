/// Joins conditional class tokens into one `class` attribute value.
///
/// `None` and blank tokens are skipped, surrounding whitespace is trimmed.
pub fn class_names<'a>(tokens: impl IntoIterator<Item = Option<&'a str>>) -> String {
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
