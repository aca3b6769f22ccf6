// SPDX-License-Identifier: MIT OR Apache-2.0

//! Left-to-right to right-to-left mirroring of style declarations.
//!
//! Stylesheets are authored in physical LTR terms (`margin-left`,
//! `text-align: left`, ...). When the page runs right-to-left every such
//! declaration is swapped to its mirror image before injection.

use super::sheet::{Declaration, StyleSheet};

/// Shorthands whose four-value form is `top right bottom left`.
const BOX_SHORTHANDS: &[&str] = &[
    "margin",
    "padding",
    "border-width",
    "border-style",
    "border-color",
    "inset",
    "scroll-margin",
    "scroll-padding",
];

/// Mirror every declaration of `sheet` that is not marked `noflip`.
pub fn mirror(sheet: &StyleSheet) -> StyleSheet {
    sheet.map_declarations(|d| {
        if d.noflip {
            d.clone()
        } else {
            let (property, value) = flip_declaration(&d.property, &d.value);
            Declaration {
                property,
                value,
                noflip: false,
            }
        }
    })
}

/// Mirror a single `property: value` pair.
pub fn flip_declaration(property: &str, value: &str) -> (String, String) {
    let property = flip_property(property);
    let value = flip_value(&property, value);
    (property, value)
}

/// Swap `left` and `right` segments of a property name, e.g.
/// `border-top-left-radius` becomes `border-top-right-radius`.
pub fn flip_property(property: &str) -> String {
    property
        .split('-')
        .map(|segment| match segment {
            "left" => "right",
            "right" => "left",
            other => other,
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn flip_value(property: &str, value: &str) -> String {
    if value.contains("url(") {
        return value.to_string();
    }
    if property == "border-radius" {
        return value
            .split('/')
            .map(|part| flip_corners(part.trim()))
            .collect::<Vec<_>>()
            .join(" / ");
    }
    if BOX_SHORTHANDS.contains(&property) {
        let mut parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() == 4 {
            parts.swap(1, 3);
            return parts.join(" ");
        }
    }
    value
        .split_whitespace()
        .map(flip_keyword)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `border-radius` lists corners clockwise from top-left, so mirroring
/// swaps each horizontal pair.
fn flip_corners(value: &str) -> String {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let flipped = match parts[..] {
        [tl, tr] => vec![tr, tl],
        [tl, tr_bl, br] => vec![tr_bl, tl, tr_bl, br],
        [tl, tr, br, bl] => vec![tr, tl, bl, br],
        _ => return parts.join(" "),
    };
    flipped.join(" ")
}

fn flip_keyword(token: &str) -> String {
    let word = token.trim_end_matches(',');
    let suffix = &token[word.len()..];
    let flipped = match word {
        "left" => "right",
        "right" => "left",
        "ltr" => "rtl",
        "rtl" => "ltr",
        other => other,
    };
    format!("{flipped}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::sheet::Rule;

    fn flip(property: &str, value: &str) -> (String, String) {
        flip_declaration(property, value)
    }

    #[test]
    fn swaps_physical_property_names() {
        assert_eq!(flip("margin-left", "8px").0, "margin-right");
        assert_eq!(flip("padding-right", "0").0, "padding-left");
        assert_eq!(flip("left", "0").0, "right");
        assert_eq!(
            flip("border-top-left-radius", "4px").0,
            "border-top-right-radius"
        );
        assert_eq!(flip("-webkit-margin-left", "1px").0, "-webkit-margin-right");
        assert_eq!(flip("margin-top", "8px").0, "margin-top");
    }

    #[test]
    fn swaps_keyword_values() {
        assert_eq!(flip("text-align", "left").1, "right");
        assert_eq!(flip("float", "right").1, "left");
        assert_eq!(flip("direction", "ltr").1, "rtl");
        assert_eq!(flip("transform-origin", "left top").1, "right top");
        assert_eq!(flip("text-align", "center").1, "center");
    }

    #[test]
    fn swaps_horizontal_sides_of_four_value_shorthands() {
        assert_eq!(flip("margin", "1px 2px 3px 4px").1, "1px 4px 3px 2px");
        assert_eq!(flip("padding", "0 24px 0 8px").1, "0 8px 0 24px");
        // Fewer than four values are already symmetric.
        assert_eq!(flip("margin", "0 auto").1, "0 auto");
        assert_eq!(flip("padding", "1px 2px 3px").1, "1px 2px 3px");
    }

    #[test]
    fn mirrors_border_radius_corners() {
        assert_eq!(flip("border-radius", "1px 2px 3px 4px").1, "2px 1px 4px 3px");
        assert_eq!(flip("border-radius", "1px 2px 3px").1, "2px 1px 2px 3px");
        assert_eq!(flip("border-radius", "1px 2px").1, "2px 1px");
        assert_eq!(flip("border-radius", "50%").1, "50%");
        assert_eq!(
            flip("border-radius", "1px 2px / 3px 4px").1,
            "2px 1px / 4px 3px"
        );
    }

    #[test]
    fn leaves_urls_and_unrelated_values_alone() {
        assert_eq!(
            flip("background", "url(left.png) no-repeat").1,
            "url(left.png) no-repeat"
        );
        assert_eq!(
            flip("background", "linear-gradient(135deg, #006d77 0%, #83c5be 100%)").1,
            "linear-gradient(135deg, #006d77 0%, #83c5be 100%)"
        );
    }

    #[test]
    fn keeps_commas_after_swapped_keywords() {
        assert_eq!(flip("transition-property", "left, top").1, "right, top");
    }

    #[test]
    fn mirror_respects_noflip() {
        let sheet = StyleSheet::new().rule(
            Rule::new(".x")
                .decl("margin-left", "8px")
                .noflip("text-align", "left"),
        );
        assert_eq!(
            mirror(&sheet).to_string(),
            ".x{margin-right:8px;text-align:left}\n"
        );
    }
}
