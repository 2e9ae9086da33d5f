/// Display names that do not reduce to their Data Dragon key by stripping
/// punctuation alone.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("KaiSa", "Kaisa"),
    ("Kai'Sa", "Kaisa"),
    ("Cho'Gath", "Chogath"),
    ("Kha'Zix", "Khazix"),
    ("LeBlanc", "Leblanc"),
    ("Vel'Koz", "Velkoz"),
    ("Nunu & Willump", "Nunu"),
    ("Renata Glasc", "Renata"),
    ("Bel'Veth", "Belveth"),
];

/// Look up a display name in the alias table (exact, case-sensitive match)
fn alias_for(name: &str) -> Option<&'static str> {
    NAME_ALIASES
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, key)| *key)
}

/// Reduce a champion display name to its Data Dragon key.
///
/// Alias table entries win; everything else keeps only ASCII letters and
/// digits. Case is never changed, and distinct names may collapse to the
/// same key.
pub fn normalize_champion_name(name: &str) -> String {
    if let Some(key) = alias_for(name) {
        return key.to_string();
    }
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
