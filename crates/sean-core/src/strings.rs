//! Derived name forms for app metadata
//!
//! The rendered templates use three shapes of the raw prompt answers: a
//! URL/package-safe slug, a human-readable form, and a capitalized author name.

/// Lowercase, alphanumeric runs joined by single hyphens: "Demo App!" -> "demo-app".
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    out
}

/// Separator runs become single spaces, first letter uppercased:
/// "demo_app" -> "Demo app".
pub fn humanize(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = words.join(" ").to_lowercase();
    if let Some(first) = out.chars().next() {
        let upper = first.to_uppercase().to_string();
        out.replace_range(..first.len_utf8(), &upper);
    }
    out
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
