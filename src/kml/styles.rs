use std::collections::HashMap;

use super::{color::kml_color_to_hex, diagnostic::Diagnostic, document::KmlDocument};

/// Color channels of a Style, in the order they are consulted. The first one present wins.
const COLOR_SOURCES: [&[&str]; 3] = [
    &["IconStyle", "color"],
    &["LineStyle", "color"],
    &["PolyStyle", "color"],
];

const NORMAL_STYLE_KEY: &str = "normal";

/// Resolved display colors keyed by style reference (`#<id>`, as used in `styleUrl`).
#[derive(Debug, Default)]
pub struct StyleColors {
    colors: HashMap<String, String>,
    diagnostics: Vec<Diagnostic>,
}

impl StyleColors {
    pub fn get(&self, style_url: &str) -> Option<&str> {
        self.colors.get(style_url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// StyleMaps whose `normal` style could not be resolved.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

fn style_reference(id: &str) -> String {
    format!("#{id}")
}

/// Build the style reference → color table.
///
/// Direct Styles are collected first. StyleMaps are then resolved against those direct styles only,
/// so an alias pointing at another StyleMap stays unresolved.
pub fn resolve_styles(document: &KmlDocument) -> StyleColors {
    let mut direct: HashMap<String, String> = HashMap::new();
    for style in document.elements("Style") {
        let Some(id) = style.attribute("id") else {
            continue;
        };
        let color_node = COLOR_SOURCES.iter().find_map(|path| style.path(path));
        if let Some(color_node) = color_node {
            direct.insert(style_reference(id), kml_color_to_hex(color_node.text()));
        }
    }
    log::debug!("Resolved {} direct styles", direct.len());

    let mut aliases: HashMap<String, String> = HashMap::new();
    let mut diagnostics = Vec::new();
    for style_map in document.elements("StyleMap") {
        let Some(id) = style_map.attribute("id") else {
            continue;
        };
        let targets: Vec<&str> = style_map
            .children("Pair")
            .filter(|pair| {
                pair.child("key")
                    .and_then(|key| key.text())
                    .map(str::trim)
                    == Some(NORMAL_STYLE_KEY)
            })
            .filter_map(|pair| pair.child("styleUrl").and_then(|url| url.text()))
            .map(str::trim)
            .collect();
        match targets.iter().find_map(|target| direct.get(*target)) {
            Some(color) => {
                aliases.insert(style_reference(id), color.clone());
            }
            None => {
                for target in targets {
                    diagnostics.push(Diagnostic::UnresolvedAlias {
                        style_map: id.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }
    log::debug!("Resolved {} style maps", aliases.len());

    let mut colors = direct;
    colors.extend(aliases);
    StyleColors {
        colors,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::kml::{color::FALLBACK_COLOR, diagnostic::Diagnostic, document::KmlDocument};

    use super::resolve_styles;

    fn kml(body: &str) -> String {
        format!(r#"<?xml version="1.0" encoding="UTF-8"?><kml xmlns="http://www.opengis.net/kml/2.2"><Document>{body}</Document></kml>"#)
    }

    #[rstest]
    #[case(
        "<IconStyle><color>ff0000ff</color></IconStyle><LineStyle><color>ff00ff00</color></LineStyle>",
        "#ff0000"
    )]
    #[case(
        "<PolyStyle><color>ffff0000</color></PolyStyle><LineStyle><color>ff00ff00</color></LineStyle>",
        "#00ff00"
    )]
    #[case("<PolyStyle><color>ffff0000</color></PolyStyle>", "#0000ff")]
    #[case(
        "<IconStyle><color>bad</color></IconStyle><LineStyle><color>ff00ff00</color></LineStyle>",
        FALLBACK_COLOR
    )]
    fn test_color_channel_priority(#[case] style_body: &str, #[case] expected: &str) {
        let text = kml(&format!(r#"<Style id="s">{style_body}</Style>"#));
        let document = KmlDocument::parse(&text).unwrap();
        let styles = resolve_styles(&document);
        assert_eq!(styles.get("#s"), Some(expected));
    }

    #[rstest]
    fn test_styles_without_id_or_color_are_skipped() {
        let text = kml(concat!(
            r#"<Style><IconStyle><color>ff0000ff</color></IconStyle></Style>"#,
            r#"<Style id="plain"><LabelStyle><scale>1</scale></LabelStyle></Style>"#,
        ));
        let document = KmlDocument::parse(&text).unwrap();
        let styles = resolve_styles(&document);
        assert!(styles.is_empty());
        assert_eq!(styles.get("#plain"), None);
    }

    #[rstest]
    fn test_style_map_uses_normal_pair() {
        let text = kml(concat!(
            r#"<Style id="red"><IconStyle><color>ff0000ff</color></IconStyle></Style>"#,
            r#"<Style id="green"><IconStyle><color>ff00ff00</color></IconStyle></Style>"#,
            r#"<StyleMap id="pin">"#,
            r#"<Pair><key>highlight</key><styleUrl>#green</styleUrl></Pair>"#,
            r#"<Pair><key>normal</key><styleUrl>#red</styleUrl></Pair>"#,
            r#"</StyleMap>"#,
        ));
        let document = KmlDocument::parse(&text).unwrap();
        let styles = resolve_styles(&document);
        assert_eq!(styles.get("#pin"), Some("#ff0000"));
        assert_eq!(styles.len(), 3);
        assert!(styles.diagnostics().is_empty());
    }

    #[rstest]
    fn test_style_map_declared_before_its_style() {
        let text = kml(concat!(
            r#"<StyleMap id="pin"><Pair><key>normal</key><styleUrl>#red</styleUrl></Pair></StyleMap>"#,
            r#"<Style id="red"><IconStyle><color>ff0000ff</color></IconStyle></Style>"#,
        ));
        let document = KmlDocument::parse(&text).unwrap();
        assert_eq!(resolve_styles(&document).get("#pin"), Some("#ff0000"));
    }

    #[rstest]
    fn test_broken_style_map_is_left_out() {
        let text = kml(
            r#"<StyleMap id="pin"><Pair><key>normal</key><styleUrl>#missing</styleUrl></Pair></StyleMap>"#,
        );
        let document = KmlDocument::parse(&text).unwrap();
        let styles = resolve_styles(&document);
        assert_eq!(styles.get("#pin"), None);
        assert_eq!(
            styles.diagnostics(),
            &[Diagnostic::UnresolvedAlias {
                style_map: "pin".to_string(),
                target: "#missing".to_string(),
            }]
        );
    }

    #[rstest]
    fn test_style_map_aliases_do_not_cascade() {
        let text = kml(concat!(
            r#"<Style id="red"><IconStyle><color>ff0000ff</color></IconStyle></Style>"#,
            r#"<StyleMap id="first"><Pair><key>normal</key><styleUrl>#red</styleUrl></Pair></StyleMap>"#,
            r#"<StyleMap id="second"><Pair><key>normal</key><styleUrl>#first</styleUrl></Pair></StyleMap>"#,
        ));
        let document = KmlDocument::parse(&text).unwrap();
        let styles = resolve_styles(&document);
        assert_eq!(styles.get("#first"), Some("#ff0000"));
        assert_eq!(styles.get("#second"), None);
        let messages: Vec<String> = styles
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect();
        assert_eq!(
            messages,
            vec![r##"StyleMap "second" refers to "#first", a style without a direct color"##]
        );
    }
}
