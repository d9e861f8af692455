use serde::Serialize;

use crate::categories::Counts;
use crate::names::PokemonNames;
use crate::standardize::standardize_card_name;

/// Standardized card names plus category totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardList {
    /// Normalized names, in input order
    pub cards: Vec<String>,
    pub counts: Counts,
}

impl CardList {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Standardize every line and tally its categories.
///
/// One output entry per input line, blank lines included.
pub fn create_card_list<I, S>(lines: I, names: &PokemonNames) -> CardList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut card_list = CardList::default();

    for line in lines {
        let line = line.as_ref();
        let card = standardize_card_name(line, names);
        log::debug!("{:?} -> {:?} {:?}", line, card.name, card.flags);

        card_list.counts.record(&card.flags);
        card_list.cards.push(card.name);
    }

    card_list
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 5] = [
        "Pikachu VMAX (Full Art) - 044/185",
        "Professor's Research - 178/202",
        "(Shiny) MEWTWO GX - 150",
        "",
        "Marnie (Full Art) - 200/202",
    ];

    fn known() -> PokemonNames {
        PokemonNames::new(["pikachu", "charizard", "mewtwo"])
    }

    #[test]
    fn preserves_order_and_length() {
        let list = create_card_list(LINES, &known());
        assert_eq!(
            list.cards,
            [
                "pikachu vmax 044/185",
                "professor's research 178/202",
                "mewtwo gx 150",
                "",
                "marnie 200/202",
            ]
        );
        assert_eq!(list.len(), LINES.len());
    }

    #[test]
    fn counts_each_category() {
        let counts = create_card_list(LINES, &known()).counts;
        assert_eq!(counts.pokemon, 2);
        assert_eq!(counts.trainer, 3);
        assert_eq!(counts.full_art, 2);
        assert_eq!(counts.half_art, 3);
        assert_eq!(counts.gx, 1);
        assert_eq!(counts.vmax, 1);
        assert_eq!(counts.v, 0);
        assert_eq!(counts.ex, 0);
    }

    #[test]
    fn pair_counts_sum_to_line_count() {
        let counts = create_card_list(LINES, &known()).counts;
        assert_eq!(counts.pokemon + counts.trainer, LINES.len());
        assert_eq!(counts.full_art + counts.half_art, LINES.len());
    }

    #[test]
    fn empty_name_set_counts_all_trainers() {
        let counts = create_card_list(LINES, &PokemonNames::empty()).counts;
        assert_eq!(counts.trainer, LINES.len());
        assert_eq!(counts.pokemon, 0);
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let list = create_card_list(Vec::<String>::new(), &known());
        assert!(list.is_empty());
        assert_eq!(list.counts, Counts::default());
    }

    #[test]
    fn accepts_owned_lines() {
        let lines = vec![String::from("Charizard EX - 12/108")];
        let list = create_card_list(&lines, &known());
        assert_eq!(list.cards, ["charizard ex 12/108"]);
        assert_eq!(list.counts.ex, 1);
    }
}
