use std::path::Path;

pub const DEFAULT_PREFIXES: &[&str] = &[
    "CIMG", "DSC", "DSCF", "DSCN", "DUW", "IMAG", "IMG", "JD", "KIF", "MGP", "S700", "PICT",
];

pub const DEFAULT_EXTENSIONS: &[&str] = &["arw", "nef", "cr2", "jpg", "jpeg"];

#[derive(Debug, Clone)]
pub struct NameRules {
    prefixes: Vec<String>,
    extensions: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        let prefixes: Vec<String> = DEFAULT_PREFIXES.iter().map(|v| v.to_string()).collect();
        let extensions: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|v| v.to_string()).collect();
        NameRules::new(&prefixes, &extensions)
    }
}

impl NameRules {
    pub fn new(prefixes: &[String], extensions: &[String]) -> Self {
        let mut prefixes: Vec<String> = prefixes
            .iter()
            .map(|v| v.trim().to_ascii_uppercase())
            .filter(|v| !v.is_empty())
            .collect();
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let extensions: Vec<String> = extensions
            .iter()
            .map(|v| v.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .collect();

        Self {
            prefixes,
            extensions,
        }
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .map(|ext| self.extensions.iter().any(|known| known == &ext))
            .unwrap_or(false)
    }

    pub fn has_default_name(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let upper = name.to_string_lossy().to_ascii_uppercase();
        let trimmed = upper.strip_prefix('_').unwrap_or(&upper);
        self.prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    fn longest_prefix_match(&self, name: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| name.starts_with(*prefix))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rewrite {
    StripLeadingUnderscore,
    StripVendorPrefix,
    CanonicalizeJpeg,
}

const REWRITE_ORDER: &[Rewrite] = &[
    Rewrite::StripLeadingUnderscore,
    Rewrite::StripVendorPrefix,
    Rewrite::CanonicalizeJpeg,
];

impl Rewrite {
    fn apply(self, name: &str, rules: &NameRules) -> Option<String> {
        match self {
            Rewrite::StripLeadingUnderscore => name.strip_prefix('_').map(str::to_string),
            Rewrite::StripVendorPrefix => rules.longest_prefix_match(name).map(|prefix| {
                let rest = &name[prefix.len()..];
                rest.strip_prefix('_').unwrap_or(rest).to_string()
            }),
            Rewrite::CanonicalizeJpeg => name
                .contains("JPEG")
                .then(|| name.replace("JPEG", "JPG")),
        }
    }
}

pub fn normalize_base_name(file_name: &str, rules: &NameRules) -> String {
    let mut name = file_name.to_ascii_uppercase();
    let mut prefix_stripped = false;

    for rule in REWRITE_ORDER {
        if let Some(next) = rule.apply(&name, rules) {
            prefix_stripped |= *rule == Rewrite::StripVendorPrefix;
            name = next;
        }
    }

    if !prefix_stripped {
        return file_name.to_ascii_lowercase();
    }
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_base_name, NameRules};
    use std::path::Path;

    #[test]
    fn strips_underscore_then_vendor_prefix() {
        let rules = NameRules::default();
        assert_eq!(normalize_base_name("_DSC3262.ARW", &rules), "3262.arw");
        assert_eq!(normalize_base_name("DSC_0976.NEF", &rules), "0976.nef");
        assert_eq!(normalize_base_name("IMG_9526.CR2", &rules), "9526.cr2");
    }

    #[test]
    fn longest_vendor_prefix_wins() {
        let rules = NameRules::default();
        assert_eq!(normalize_base_name("DSCF1234.JPG", &rules), "1234.jpg");
        assert_eq!(normalize_base_name("DSCN0042.JPG", &rules), "0042.jpg");
    }

    #[test]
    fn canonicalizes_jpeg_extension_after_prefix_strip() {
        let rules = NameRules::default();
        assert_eq!(normalize_base_name("IMG_0001.JPEG", &rules), "0001.jpg");
        assert_eq!(normalize_base_name("CIMG0003.jpeg", &rules), "0003.jpg");
    }

    #[test]
    fn leaves_unprefixed_names_untouched() {
        let rules = NameRules::default();
        assert_eq!(normalize_base_name("Holiday.JPEG", &rules), "holiday.jpeg");
        assert_eq!(normalize_base_name("photo.jpg", &rules), "photo.jpg");
    }

    #[test]
    fn supported_extension_is_case_insensitive() {
        let rules = NameRules::default();
        assert!(rules.is_supported(Path::new("a/IMG_0001.jpg")));
        assert!(rules.is_supported(Path::new("a/DSC_0001.NEF")));
        assert!(rules.is_supported(Path::new("a/_DSC3262.Arw")));
        assert!(!rules.is_supported(Path::new("a/random.txt")));
        assert!(!rules.is_supported(Path::new("a/noextension")));
    }

    #[test]
    fn default_name_requires_vendor_prefix() {
        let rules = NameRules::default();
        assert!(rules.has_default_name(Path::new("a/IMG_0001.jpg")));
        assert!(rules.has_default_name(Path::new("a/_DSC3262.ARW")));
        assert!(rules.has_default_name(Path::new("a/dscf0001.jpg")));
        assert!(!rules.has_default_name(Path::new("a/photo.jpg")));
        assert!(!rules.has_default_name(Path::new("a/__DSC0001.jpg")));
    }

    #[test]
    fn configured_rules_are_normalized() {
        let rules = NameRules::new(
            &["abc".to_string(), " ".to_string()],
            &[".JPG".to_string(), String::new()],
        );
        assert!(rules.is_supported(Path::new("x/ABC0001.jpg")));
        assert!(rules.has_default_name(Path::new("x/abc0001.jpg")));
        assert_eq!(normalize_base_name("ABC_0001.JPG", &rules), "0001.jpg");
    }
}
