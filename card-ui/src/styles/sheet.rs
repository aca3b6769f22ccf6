// SPDX-License-Identifier: MIT OR Apache-2.0

//! A tiny structured stylesheet.
//!
//! Rules are kept as data so the RTL pass can rewrite individual
//! declarations instead of re-parsing CSS text.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    /// Excluded from direction mirroring.
    pub noflip: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
            noflip: false,
        });
        self
    }

    /// Like [`Rule::decl`], but the declaration is never mirrored.
    pub fn noflip(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
            noflip: true,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Rule(Rule),
    /// Rules applied from `min_width` px upwards.
    Media { min_width: u32, rules: Vec<Rule> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    pub blocks: Vec<Block>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.blocks.push(Block::Rule(rule));
        self
    }

    pub fn media(mut self, min_width: u32, rules: Vec<Rule>) -> Self {
        self.blocks.push(Block::Media { min_width, rules });
        self
    }

    /// Rebuild the sheet with every declaration passed through `f`.
    pub fn map_declarations<F>(&self, f: F) -> StyleSheet
    where
        F: Fn(&Declaration) -> Declaration,
    {
        let map_rule = |rule: &Rule| Rule {
            selector: rule.selector.clone(),
            declarations: rule.declarations.iter().map(&f).collect(),
        };
        let blocks = self
            .blocks
            .iter()
            .map(|block| match block {
                Block::Rule(rule) => Block::Rule(map_rule(rule)),
                Block::Media { min_width, rules } => Block::Media {
                    min_width: *min_width,
                    rules: rules.iter().map(map_rule).collect(),
                },
            })
            .collect();
        StyleSheet { blocks }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        for (i, d) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}:{}", d.property, d.value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Rule(rule) => writeln!(f, "{rule}")?,
                Block::Media { min_width, rules } => {
                    write!(f, "@media (min-width:{min_width}px){{")?;
                    for rule in rules {
                        write!(f, "{rule}")?;
                    }
                    writeln!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rules_and_media_blocks() {
        let sheet = StyleSheet::new()
            .rule(Rule::new("body").decl("margin", "0").decl("color", "#1f2933"))
            .media(900, vec![Rule::new(".grid").decl("display", "grid")]);
        assert_eq!(
            sheet.to_string(),
            "body{margin:0;color:#1f2933}\n@media (min-width:900px){.grid{display:grid}}\n"
        );
    }

    #[test]
    fn empty_rule_renders_braces() {
        assert_eq!(Rule::new(".x").to_string(), ".x{}");
    }

    #[test]
    fn map_declarations_keeps_structure() {
        let sheet = StyleSheet::new()
            .rule(Rule::new("a").decl("float", "left"))
            .media(600, vec![Rule::new("b").noflip("float", "left")]);
        let upper = sheet.map_declarations(|d| Declaration {
            value: d.value.to_uppercase(),
            ..d.clone()
        });
        assert_eq!(
            upper.to_string(),
            "a{float:LEFT}\n@media (min-width:600px){b{float:LEFT}}\n"
        );
        match &upper.blocks[1] {
            Block::Media { rules, .. } => assert!(rules[0].declarations[0].noflip),
            Block::Rule(_) => panic!("expected media block"),
        }
    }
}
