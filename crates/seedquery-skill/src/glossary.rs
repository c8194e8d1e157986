//! Built-in glossary of bioinformatics terms.
//!
//! Exact, case-preserving lookup of a spoken term against a fixed table of
//! concepts, each reachable through one or more alias spellings (plurals and
//! common speech-recognition variants).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Spoken when the platform could not fill the term slot.
pub const NO_TERM_SPEECH: &str = "I am sorry, but I didn't understand your request.";

/// A concept and the spellings that reach it.
#[derive(Debug, Clone, Copy)]
pub struct GlossaryEntry {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub explanation: &'static str,
}

pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        canonical: "protein",
        aliases: &["protein", "proteins"],
        explanation: "A protein is a large molecule made up mostly of carbon, hydrogen, oxygen, and nitrogen. \
            Proteins are formed by putting smaller molecules called amino acids together in a long \
            chain which folds itself into a complicated nest of curls and spirals. The amino acids \
            in these curls and spirals trigger chemical reactions in a cell. Every single thing \
            that happens inside a living cell is determined by the proteins formed from the cell's DNA.",
    },
    GlossaryEntry {
        canonical: "amino acid",
        aliases: &["amino acid", "acid", "amino acids", "acids"],
        explanation: "An amino acid is a small molecule that forms part of a protein. Every known protein is \
            a long sequence of amino acids. There are 22 known amino acids, of which 20 are used by \
            most life forms. Phenylalanine, a common dietary supplement, is an amino acid. \
            Your body knows how to make 11 of the amino acids, but you have to get the other 9 from \
            the food you eat and the liquids you drink.",
    },
    GlossaryEntry {
        canonical: "bacteria",
        aliases: &["bacteria", "bacterium"],
        explanation: "Bacteria are simple, single-celled creatures that live everywhere and in everything. \
            Unlike the cells in large animals and plants, that contain many different parts, a \
            bacterium is simply a bag of chemicals inside a thick membrane called the cell wall. \
            Bacteria are the cause of many terrible diseases, such as tuberculosis, plague, and \
            anthrax. But most bacteria are harmless. The bacteria in your stomach help you digest \
            plant and animal tissue. The bacteria in a baby's milk protect the baby from disorders \
            such as allergies and autism. In your body, there are 10 bacterial cells \
            for every human cell. The human cells, however, are much larger, anywhere from 100 \
            to 1000 times the volume of a typical bacterium.",
    },
    GlossaryEntry {
        canonical: "archaea",
        aliases: &["archaea"],
        explanation: "Archaea are simple, single-celled creatures known for their ability to live in extreme \
            environments like volcano springs, glaciers, and acid pools. Some of them even breathe \
            methane instead of carbon dioxide or oxygen. The chemistry inside an archael cell is \
            therefore very different from the chemistry inside a bacterium. Not much is known about \
            archaea because most of them cannot be cultured in a laboratory for study.",
    },
    GlossaryEntry {
        canonical: "eukaryote",
        aliases: &["eukaryote", "eukaryotes", "eukaryota", "eukarya"],
        explanation: "Eukaryotes are complex organisms in which the cell is divided into tiny biological machines \
            separated by membranes. These machines include the nucleus, the cytoskeleton, mitochondria, \
            and chloroplasts. All multi-cellular life forms are eukaryotes, but some are single-celled, \
            such as the plasmodium, which is the parasite that causes malaria. A eukaryote has multiple \
            strings of DNA instead of a single circular chain like bacteria and archaea. This allows \
            eukaryotes to evolve much faster, which is how they became so big and complicated. Life has \
            existed on Earth for approximately 4 billion years, but eukaryotes have been around for only \
            1800 million years. Yet in that time, they have come to dominate the surface of the planet.",
    },
    GlossaryEntry {
        canonical: "DNA",
        aliases: &["DNA", "deoxyribonucleic acid", "nucleic acid"],
        explanation: "DNA, or deoxyribonucleic acid, is a gigantic molecule consisting of two intertwined helixes. \
            Each helix is a chain of small molecules called nucleotides or bases. The nucleotides match up \
            with each other, so if you lose one helix, you can rebuild it from the other one. DNA is used \
            to create proteins from amino acids, and these proteins control all the chemical reactions in \
            living cells.",
    },
    GlossaryEntry {
        canonical: "RNA",
        aliases: &["RNA", "ribonucleic acid"],
        explanation: "RNA, or ribonucleic acid, is a molecule formed from DNA. There are several types of RNA. \
            Messenger RNA contains the codons from DNA, and describes a protein. Transfer RNA collects the \
            amino acids from the cell and connects them to the messenger RNA to create the protein. Ribosomal \
            RNA turns into the ribosome chemicals that create the messenger RNA from the DNA. Each species has \
            its own slightly different version of RNA, and RNA is used in modern bio-informatics to chart the \
            course of evolution.",
    },
    GlossaryEntry {
        canonical: "bioinformatics",
        aliases: &[
            "bio informatics",
            "bio infomatics",
            "bioinformatics",
            "bioinfomatics",
        ],
        explanation: "Bio-informatics is the use of computers to study DNA sequences so that we can learn how life \
            works, how to cure and prevent diseases and genetic disorders, how to help people live longer, and \
            how the various parts of earth's ecology fit together.",
    },
    GlossaryEntry {
        canonical: "genome",
        aliases: &["genome", "genomes"],
        explanation: "A genome is the DNA of a single organism stored in a computer. When we sequence DNA to create \
            a genome, we don't always get everything, so the genome comes back in multiple pieces called contigs. \
            The size of the genome is measured in millions of base pairs, or megabases.",
    },
    GlossaryEntry {
        canonical: "contig",
        aliases: &["contig", "contigs"],
        explanation: "A contig is a contiguous sequence of DNA for a genome. If we are missing a lot of the DNA for \
            a genome, then there will be a lot of short contigs. So the fewer contigs a genome has, the more \
            confident we are that we know everything we need to know about the genome.",
    },
    GlossaryEntry {
        canonical: "feature",
        aliases: &["feature", "features"],
        explanation: "A feature is a region of DNA in a genome that performs a function. Most features create \
            proteins. We call those genes. Some features create RNA, some switch other features on and off. \
            Some represent groups of other features that work together.",
    },
    GlossaryEntry {
        canonical: "function",
        aliases: &["function", "functions"],
        explanation: "A function is a description of what a protein does. Most proteins only do one thing, but \
            some do two or three. Each thing the protein does is called a role. Each role represents a chemical \
            reaction that happens in the cell when the protein is present.",
    },
    GlossaryEntry {
        canonical: "role",
        aliases: &["role", "roles"],
        explanation: "A role is a description of a group of chemical reactions caused by a protein's presence in \
            the cell. If we know all the roles in the genome for a simple life form like a bacteria or archaea, \
            we can create giant computer models of all the chemical reactions. These models enable us to simulate \
            the life of the creature so we can guess what kills it, what helps it live, and what might make it \
            decide to get angry and attack.",
    },
    GlossaryEntry {
        canonical: "subsystem",
        aliases: &[
            "subsystem",
            "subsystems",
            "sub systems",
            "sub system",
            "subsistence",
        ],
        explanation: "A subsystem is a group of roles that work together to perform a major process, such as \
            building a cell wall, replicating the cell, converting sugar into energy, or protecting the cell \
            from toxins. In bio-informatics, subsystems help us to figure out the functions of proteins.",
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static GlossaryEntry>> = LazyLock::new(|| {
    GLOSSARY
        .iter()
        .flat_map(|entry| entry.aliases.iter().map(move |alias| (*alias, entry)))
        .collect()
});

/// Find the entry a spoken term refers to. Matching is exact and case-sensitive.
pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    INDEX.get(term).copied()
}

/// Spoken explanation of a term.
///
/// Unknown terms are echoed back verbatim in the apology.
pub fn explain(term: Option<&str>) -> String {
    match term {
        None => NO_TERM_SPEECH.to_string(),
        Some(term) => match lookup(term) {
            Some(entry) => entry.explanation.to_string(),
            None => format!("I am sorry. I don't understand the term {}.", term),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_explanation() {
        for entry in GLOSSARY {
            let expected = explain(Some(entry.canonical));
            for alias in entry.aliases {
                assert_eq!(explain(Some(alias)), expected, "alias {alias}");
            }
        }
        assert_eq!(explain(Some("protein")), explain(Some("proteins")));
    }

    #[test]
    fn test_canonical_is_an_alias() {
        for entry in GLOSSARY {
            assert!(entry.aliases.contains(&entry.canonical), "{}", entry.canonical);
        }
    }

    #[test]
    fn test_aliases_are_unique_across_entries() {
        let total: usize = GLOSSARY.iter().map(|e| e.aliases.len()).sum();
        assert_eq!(INDEX.len(), total);
    }

    #[test]
    fn test_all_concepts_present() {
        for term in [
            "protein",
            "amino acid",
            "bacteria",
            "archaea",
            "eukaryote",
            "DNA",
            "RNA",
            "bioinformatics",
            "genome",
            "contig",
            "feature",
            "function",
            "role",
            "subsystem",
        ] {
            assert!(lookup(term).is_some(), "{term}");
        }
    }

    #[test]
    fn test_unknown_term_is_echoed() {
        assert_eq!(
            explain(Some("plasmid")),
            "I am sorry. I don't understand the term plasmid."
        );
        assert_eq!(
            explain(Some("tell me <anything>")),
            "I am sorry. I don't understand the term tell me <anything>."
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(lookup("dna").is_none());
        assert!(lookup("Protein").is_none());
        assert_eq!(
            explain(Some("dna")),
            "I am sorry. I don't understand the term dna."
        );
    }

    #[test]
    fn test_missing_term_apologizes() {
        assert_eq!(explain(None), NO_TERM_SPEECH);
    }

    #[test]
    fn test_explain_is_deterministic() {
        assert_eq!(explain(Some("contig")), explain(Some("contig")));
        assert!(explain(Some("contig")).starts_with("A contig is"));
    }
}
