use anyhow::Result;
use entailment_rs::{Biconditional, Implication, Or, Sentence, Symbol};

/// A named knowledge base and a query to check against it.
pub(crate) struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub knowledge: Sentence,
    pub query: Sentence,
}

fn sym(name: &str) -> Sentence {
    Symbol::new(name).into()
}

pub(crate) fn catalog() -> Result<Vec<CatalogEntry>> {
    Ok(vec![
        CatalogEntry {
            name: "rain-wet",
            description: "rain makes the ground wet, but it may not rain",
            knowledge: Implication::new(sym("rain"), sym("wet")).into(),
            query: sym("wet"),
        },
        CatalogEntry {
            name: "tautology",
            description: "a biconditional of a sentence with itself always holds",
            knowledge: sym("p"),
            query: Biconditional::new(sym("p"), sym("p")).into(),
        },
        CatalogEntry {
            name: "weakening",
            description: "adding a predicate to a disjunction keeps it true",
            knowledge: Or::new([sym("a"), sym("b")])?.into(),
            query: Or::new([sym("a"), sym("b"), sym("c")])?.into(),
        },
        CatalogEntry {
            name: "biconditional-converse",
            description: "a biconditional holds in both directions",
            knowledge: Biconditional::new(sym("rain"), sym("wet")).into(),
            query: Implication::new(sym("wet"), sym("rain")).into(),
        },
        CatalogEntry {
            name: "affirming-consequent",
            description: "an implication does not give its converse",
            knowledge: Implication::new(sym("rain"), sym("wet")).into(),
            query: Implication::new(sym("wet"), sym("rain")).into(),
        },
        CatalogEntry {
            name: "modus-ponens",
            description: "rain holds, and rain makes the ground wet",
            knowledge: Biconditional::new(sym("rain"), Implication::new(sym("rain"), sym("wet")))
                .into(),
            query: sym("wet"),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use entailment_rs::model_check;

    #[test]
    fn test_catalog_results() {
        let results = catalog()
            .unwrap()
            .iter()
            .map(|e| (e.name, model_check(&e.knowledge, &e.query).unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("rain-wet", false),
                ("tautology", true),
                ("weakening", true),
                ("biconditional-converse", true),
                ("affirming-consequent", false),
                ("modus-ponens", true),
            ],
            results
        );
    }
}
