//! Static recycling content
//!
//! Holds the per-category recycling instructions and the keyword to fun fact
//! table. Both are built once at startup by [`Content::new`] and only read
//! afterwards; screens receive them through a shared [`std::sync::Arc`].

use std::collections::HashMap;
use std::fmt;

/// One of the fixed recycling material classes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Plastics,
    Paper,
    Metals,
    Glass,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 4] = [Category::Plastics, Category::Paper, Category::Metals, Category::Glass];

    pub fn name(self) -> &'static str {
        match self {
            Category::Plastics => "Plastics",
            Category::Paper => "Paper",
            Category::Metals => "Metals",
            Category::Glass => "Glass",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instructional text for a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecyclingGuide {
    pub category: Category,
    pub instructions: &'static str,
}

const PLASTICS_INSTRUCTIONS: &str = "(HOW TO) Recycling instructions for plastics:\n\n\
1. Rinse out all plastic containers.\n\
2. Remove any labels, lids, or caps.\n\
3. Take plastic bags to a grocery store that accepts them.\n\
4. Check for recycling symbols and sort accordingly.\n\
5. Avoid recycling items with food residue.\n\n\
Do Not:\n\
1. Do not recycle plastic bags in curbside bins.\n\
2. Do not recycle plastic items with food contamination.\n\
3. Do not recycle Styrofoam products.\n\
4. Do not recycle plastic toys.";

const PAPER_INSTRUCTIONS: &str = "(HOW TO) Recycling instructions for paper:\n\n\
1. Separate paper types (newspapers, office paper, cardboard).\n\
2. Remove any staples, paper clips, or bindings.\n\
3. Ensure paper is clean and dry.\n\
4. Flatten cardboard boxes.\n\
5. Make sure paper is not contaminated with food or grease.\n\n\
Do Not:\n\
1. Do not recycle paper towels or tissues.\n\
2. Do not recycle paper with food contamination.\n\
3. Do not recycle laminated paper.\n\
4. Do not recycle wax-coated paper.";

const METALS_INSTRUCTIONS: &str = "(HOW TO) Recycling instructions for metals:\n\n\
1. Rinse out metal cans and containers.\n\
2. Remove any labels, lids, or non-metal parts.\n\
3. Check for recycling symbols and sort accordingly.\n\
4. Crush cans to save space, if possible.\n\n\
Do Not:\n\
1. Do not recycle aerosol cans unless empty.\n\
2. Do not recycle items with hazardous materials.\n\
3. Do not recycle electronics or batteries.\n\
4. Do not recycle metal items that are not containers.";

const GLASS_INSTRUCTIONS: &str = "(HOW TO) Recycling instructions for glass:\n\n\
1. Rinse out glass bottles and jars.\n\
2. Remove any labels, lids, or caps.\n\
3. Separate by color (clear, green, brown).\n\
4. Avoid mixing glass with other recyclables.\n\n\
Do Not:\n\
1. Do not recycle broken glass.\n\
2. Do not recycle light bulbs or mirrors.\n\
3. Do not recycle ceramics or Pyrex.\n\
4. Do not recycle glass with food contamination.";

const FUN_FACTS: [(&str, &str); 4] = [
    (
        "plastic",
        "Did you know? Recycling plastic can save up to 88% of the energy needed to produce plastic from raw materials!",
    ),
    (
        "paper",
        "Did you know? Recycling one ton of paper can save 17 trees and 7,000 gallons of water!",
    ),
    (
        "metal",
        "Did you know? Recycling one aluminum can saves enough energy to power a TV for three hours!",
    ),
    (
        "glass",
        "Did you know? Recycling glass reduces water pollution by 50% and air pollution by 20%!",
    ),
];

/// Lowercase singular material keyword to fact. Exact-match lookups only.
#[derive(Debug, Clone)]
pub struct FunFacts {
    facts: HashMap<&'static str, &'static str>,
}

impl FunFacts {
    pub fn get(&self, keyword: &str) -> Option<&'static str> {
        self.facts.get(keyword).copied()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Known keywords, sorted
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keywords: Vec<_> = self.facts.keys().copied().collect();
        keywords.sort_unstable();
        keywords
    }
}

impl Default for FunFacts {
    fn default() -> Self {
        Self {
            facts: FUN_FACTS.into_iter().collect(),
        }
    }
}

/// All static content shown by the application
#[derive(Debug, Clone)]
pub struct Content {
    guides: Vec<RecyclingGuide>,
    fun_facts: FunFacts,
}

impl Content {
    pub fn new() -> Self {
        let guides = Category::ALL
            .into_iter()
            .map(|category| RecyclingGuide {
                category,
                instructions: match category {
                    Category::Plastics => PLASTICS_INSTRUCTIONS,
                    Category::Paper => PAPER_INSTRUCTIONS,
                    Category::Metals => METALS_INSTRUCTIONS,
                    Category::Glass => GLASS_INSTRUCTIONS,
                },
            })
            .collect();

        Self {
            guides,
            fun_facts: FunFacts::default(),
        }
    }

    /// Guides in tab order
    pub fn guides(&self) -> &[RecyclingGuide] {
        &self.guides
    }

    pub fn guide(&self, index: usize) -> Option<&RecyclingGuide> {
        self.guides.get(index)
    }

    pub fn fun_facts(&self) -> &FunFacts {
        &self.fun_facts
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::new()
    }
}
