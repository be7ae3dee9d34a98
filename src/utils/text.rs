/// Replace accented Latin letters with their unaccented ASCII base letter.
/// Characters without a known base letter pass through unchanged.
pub fn fold_accents(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let upper = c.is_uppercase();
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = match lower {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return c,
    };
    if upper {
        base.to_ascii_uppercase()
    } else {
        base
    }
}

/// URL slug for a title: lowercase ASCII words joined by single dashes.
///
/// The same title always yields the same slug. Titles with no usable
/// characters produce `"secao"`.
pub fn slugify(title: &str) -> String {
    let folded = fold_accents(title).to_lowercase();
    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;

    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "secao".to_string()
    } else {
        slug
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_portuguese_accents() {
        assert_eq!(fold_accents("Ação Educação"), "Acao Educacao");
        assert_eq!(fold_accents("ÁRVORE"), "ARVORE");
    }

    #[test]
    fn slug_is_deterministic_and_collapses_separators() {
        assert_eq!(slugify("Quem Somos?"), "quem-somos");
        assert_eq!(slugify("  Projetos   de  Inclusão  "), "projetos-de-inclusao");
        assert_eq!(slugify("Quem Somos?"), slugify("Quem Somos?"));
    }

    #[test]
    fn slug_of_symbols_falls_back() {
        assert_eq!(slugify("!!!"), "secao");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }
}
