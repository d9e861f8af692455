use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// One of the eight card categories tracked per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Trainer,
    Pokemon,
    FullArt,
    HalfArt,
    Gx,
    Ex,
    V,
    Vmax,
}

impl Category {
    /// Every category, in reporting order
    pub const ALL: [Category; 8] = [
        Category::Trainer,
        Category::Pokemon,
        Category::FullArt,
        Category::HalfArt,
        Category::Gx,
        Category::Ex,
        Category::V,
        Category::Vmax,
    ];

    /// Snake-case key used in reports and JSON output
    pub fn name(self) -> &'static str {
        match self {
            Category::Trainer => "trainer",
            Category::Pokemon => "pokemon",
            Category::FullArt => "full_art",
            Category::HalfArt => "half_art",
            Category::Gx => "gx",
            Category::Ex => "ex",
            Category::V => "v",
            Category::Vmax => "vmax",
        }
    }

    /// Key with its first letter capitalized, e.g. `Full_art`
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Category flags for a single card line.
///
/// `trainer`/`pokemon` and `full_art`/`half_art` are each exactly-one-of pairs;
/// the rarity markers are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    pub trainer: bool,
    pub pokemon: bool,
    pub full_art: bool,
    pub half_art: bool,
    pub gx: bool,
    pub ex: bool,
    pub v: bool,
    pub vmax: bool,
}

impl CategoryFlags {
    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Trainer => self.trainer,
            Category::Pokemon => self.pokemon,
            Category::FullArt => self.full_art,
            Category::HalfArt => self.half_art,
            Category::Gx => self.gx,
            Category::Ex => self.ex,
            Category::V => self.v,
            Category::Vmax => self.vmax,
        }
    }
}

/// Running per-category totals over a card list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub trainer: usize,
    pub pokemon: usize,
    pub full_art: usize,
    pub half_art: usize,
    pub gx: usize,
    pub ex: usize,
    pub v: usize,
    pub vmax: usize,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment every category whose flag is set
    pub fn record(&mut self, flags: &CategoryFlags) {
        for category in Category::ALL {
            if flags.get(category) {
                *self.slot_mut(category) += 1;
            }
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Trainer => self.trainer,
            Category::Pokemon => self.pokemon,
            Category::FullArt => self.full_art,
            Category::HalfArt => self.half_art,
            Category::Gx => self.gx,
            Category::Ex => self.ex,
            Category::V => self.v,
            Category::Vmax => self.vmax,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Trainer => &mut self.trainer,
            Category::Pokemon => &mut self.pokemon,
            Category::FullArt => &mut self.full_art,
            Category::HalfArt => &mut self.half_art,
            Category::Gx => &mut self.gx,
            Category::Ex => &mut self.ex,
            Category::V => &mut self.v,
            Category::Vmax => &mut self.vmax,
        }
    }

    /// Iterate `(category, count)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Number of lines seen, derived from the trainer/pokemon pair
    pub fn lines(&self) -> usize {
        self.trainer + self.pokemon
    }
}

// Serialized as an ordered map so JSON keys follow Category::ALL
impl Serialize for Counts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.name(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_capitalize_first_letter_only() {
        assert_eq!(Category::FullArt.label(), "Full_art");
        assert_eq!(Category::Vmax.label(), "Vmax");
        assert_eq!(Category::V.label(), "V");
    }

    #[test]
    fn record_increments_only_set_flags() {
        let mut counts = Counts::new();
        let flags = CategoryFlags {
            pokemon: true,
            full_art: true,
            vmax: true,
            ..Default::default()
        };
        counts.record(&flags);
        counts.record(&flags);

        assert_eq!(counts.pokemon, 2);
        assert_eq!(counts.full_art, 2);
        assert_eq!(counts.vmax, 2);
        assert_eq!(counts.trainer, 0);
        assert_eq!(counts.v, 0);
        assert_eq!(counts.lines(), 2);
    }

    #[test]
    fn iter_follows_reporting_order() {
        let counts = Counts {
            gx: 3,
            ..Default::default()
        };
        let names: Vec<_> = counts.iter().map(|(c, _)| c.name()).collect();
        assert_eq!(
            names,
            ["trainer", "pokemon", "full_art", "half_art", "gx", "ex", "v", "vmax"]
        );
        assert_eq!(counts.get(Category::Gx), 3);
    }

    #[test]
    fn counts_serialize_as_ordered_object() {
        let counts = Counts {
            trainer: 1,
            half_art: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"trainer":1,"pokemon":0,"full_art":0,"half_art":1,"gx":0,"ex":0,"v":0,"vmax":0}"#
        );
    }
}
