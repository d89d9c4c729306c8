// file: src/text/tagger.rs
// description: lexicon and suffix based part-of-speech tagger with Penn Treebank style tags
// reference: https://www.ling.upenn.edu/courses/Fall_2003/ling001/penn_treebank_pos.html

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Conjunction,
    Number,
    Determiner,
    Preposition,
    Adjective,
    Modal,
    Noun,
    PluralNoun,
    ProperNoun,
    Pronoun,
    PossessivePronoun,
    Adverb,
    To,
    Interjection,
    Verb,
    VerbPast,
    VerbGerund,
    VerbParticiple,
    VerbPresent,
    VerbThirdPerson,
    WhWord,
    Symbol,
    Punctuation,
}

impl PosTag {
    pub fn penn(&self) -> &'static str {
        match self {
            PosTag::Conjunction => "CC",
            PosTag::Number => "CD",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Adverb => "RB",
            PosTag::To => "TO",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::WhWord => "WP",
            PosTag::Symbol => "SYM",
            PosTag::Punctuation => ".",
        }
    }

    /// True for every `VB*` tag.
    pub fn is_verb(&self) -> bool {
        self.penn().starts_with("VB")
    }

    fn is_nominal(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun | PosTag::Pronoun
        )
    }

    fn opens_noun_phrase(&self) -> bool {
        matches!(
            self,
            PosTag::Determiner | PosTag::PossessivePronoun | PosTag::Adjective | PosTag::Number
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub text: &'a str,
    pub tag: PosTag,
}

pub struct PosTagger {
    closed_class: HashMap<&'static str, PosTag>,
    verb_bases: HashSet<&'static str>,
    irregular_forms: HashMap<&'static str, PosTag>,
    ing_nouns: HashSet<&'static str>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    pub fn new() -> Self {
        Self {
            closed_class: Self::create_closed_class(),
            verb_bases: VERB_BASES.iter().copied().collect(),
            irregular_forms: Self::create_irregular_forms(),
            ing_nouns: ING_NOUNS.iter().copied().collect(),
        }
    }

    pub fn tag<'a>(&self, tokens: &[&'a str]) -> Vec<TaggedToken<'a>> {
        let mut tagged: Vec<TaggedToken<'a>> = Vec::with_capacity(tokens.len());

        for &token in tokens {
            let prev = tagged.last().copied();
            let clause_start = matches!(prev.map(|t| t.tag), None | Some(PosTag::Punctuation));
            let tag = self.tag_token(token, prev, clause_start);
            tagged.push(TaggedToken { text: token, tag });
        }

        tagged
    }

    /// Tags a sentence and reports whether any token is a verb form.
    pub fn has_verb(&self, tokens: &[&str]) -> bool {
        self.tag(tokens).iter().any(|t| t.tag.is_verb())
    }

    fn tag_token(&self, word: &str, prev_token: Option<TaggedToken>, clause_start: bool) -> PosTag {
        let prev = prev_token.map(|t| t.tag);

        if !word.chars().any(char::is_alphanumeric) {
            return match word {
                "@" | "#" | "$" | "%" | "&" | "+" | "=" => PosTag::Symbol,
                _ => PosTag::Punctuation,
            };
        }

        if word.starts_with(|c: char| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
        {
            return PosTag::Number;
        }

        // Mentions and hashtags name someone or something.
        if prev == Some(PosTag::Symbol) {
            return PosTag::ProperNoun;
        }

        let lower = word.to_lowercase();
        let lower = lower.replace('’', "'");
        let capitalized = word.starts_with(char::is_uppercase);

        if lower == "please" {
            return if clause_start {
                PosTag::Verb
            } else {
                PosTag::Interjection
            };
        }

        if let Some(tag) = self.closed_class.get(lower.as_str()) {
            // Imperative auxiliaries ("Do the review")
            if clause_start && *tag == PosTag::VerbPresent {
                return PosTag::Verb;
            }
            return *tag;
        }

        if let Some(prev) = prev {
            if prev.opens_noun_phrase() {
                return self.nominal(&lower, capitalized);
            }

            if matches!(prev, PosTag::Modal | PosTag::To) && !capitalized {
                return PosTag::Verb;
            }
        }

        if let Some(tag) = self.irregular_forms.get(lower.as_str()) {
            return *tag;
        }

        if self.verb_bases.contains(lower.as_str()) {
            return match prev {
                None | Some(PosTag::Punctuation) => PosTag::Verb,
                Some(p) if p.is_nominal() || p == PosTag::WhWord => PosTag::VerbPresent,
                Some(PosTag::Adverb | PosTag::Interjection | PosTag::Conjunction) => PosTag::Verb,
                Some(_) if capitalized => PosTag::ProperNoun,
                Some(_) => PosTag::Noun,
            };
        }

        if let Some(tag) = self.third_person(&lower, prev) {
            return tag;
        }

        if let Some(tag) = self.verb_by_suffix(&lower, prev, clause_start) {
            return tag;
        }

        if !capitalized
            && let Some(tag) = self.after_subject(&lower, prev_token)
        {
            return tag;
        }

        if capitalized && !clause_start {
            return PosTag::ProperNoun;
        }

        self.nominal(&lower, false)
    }

    fn third_person(&self, lower: &str, prev: Option<PosTag>) -> Option<PosTag> {
        if !prev.is_some_and(|p| p.is_nominal()) {
            return None;
        }

        let stem = lower
            .strip_suffix("es")
            .filter(|s| self.verb_bases.contains(s))
            .or_else(|| lower.strip_suffix('s'))?;

        self.verb_bases
            .contains(stem)
            .then_some(PosTag::VerbThirdPerson)
    }

    fn verb_by_suffix(&self, lower: &str, prev: Option<PosTag>, clause_start: bool) -> Option<PosTag> {
        let len = lower.chars().count();

        if len >= 5 && lower.ends_with("ing") && !self.ing_nouns.contains(lower) {
            return Some(PosTag::VerbGerund);
        }

        if len >= 5 && lower.ends_with("ed") && !ED_NON_VERBS.contains(&lower) {
            return Some(match prev {
                Some(p) if p.is_verb() => PosTag::VerbParticiple,
                _ => PosTag::VerbPast,
            });
        }

        if len >= 6 && (lower.ends_with("ize") || lower.ends_with("ify")) {
            return Some(if clause_start {
                PosTag::Verb
            } else {
                PosTag::VerbPresent
            });
        }

        None
    }

    /// Unknown words right after a subject are finite verbs ("We launch",
    /// "The deploy fails"). Singular nouns only take the `-s` form.
    fn after_subject(&self, lower: &str, prev: Option<TaggedToken>) -> Option<PosTag> {
        let prev = prev?;
        let len = lower.chars().count();
        let third_person_form = len > 3 && lower.ends_with('s') && !lower.ends_with("ss");

        if len > 4 && lower.ends_with("ly") {
            return None;
        }

        match prev.tag {
            PosTag::Pronoun if SUBJECT_PRONOUNS.contains(&prev.text.to_lowercase().as_str()) => {
                Some(if third_person_form {
                    PosTag::VerbThirdPerson
                } else {
                    PosTag::VerbPresent
                })
            }
            PosTag::Noun | PosTag::ProperNoun if third_person_form => {
                Some(PosTag::VerbThirdPerson)
            }
            _ => None,
        }
    }

    fn nominal(&self, lower: &str, capitalized: bool) -> PosTag {
        let len = lower.chars().count();

        if capitalized {
            return PosTag::ProperNoun;
        }

        if len > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        if len > 4
            && ["ous", "ful", "able", "ible", "ive", "less", "ic"]
                .iter()
                .any(|suffix| lower.ends_with(suffix))
        {
            return PosTag::Adjective;
        }

        if len > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return PosTag::PluralNoun;
        }

        PosTag::Noun
    }

    fn create_closed_class() -> HashMap<&'static str, PosTag> {
        let groups: [(&[&'static str], PosTag); 17] = [
            (
                &[
                    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some",
                    "any", "no", "all", "both", "another", "either", "neither",
                ],
                PosTag::Determiner,
            ),
            (
                &[
                    "in", "on", "at", "by", "for", "with", "from", "of", "about", "into",
                    "over", "under", "after", "before", "during", "between", "through",
                    "without", "within", "against", "among", "around", "until", "via", "per",
                    "across", "behind", "near", "toward", "towards", "upon", "than", "since",
                    "as", "because", "if", "while", "whether", "unless", "like",
                ],
                PosTag::Preposition,
            ),
            (
                &[
                    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them",
                    "myself", "yourself", "ourselves", "themselves", "someone", "somebody",
                    "everyone", "everybody", "anyone", "nobody", "something", "anything",
                    "nothing", "everything",
                ],
                PosTag::Pronoun,
            ),
            (
                &["my", "your", "his", "her", "its", "our", "their"],
                PosTag::PossessivePronoun,
            ),
            (
                &[
                    "great", "good", "bad", "new", "old", "big", "small", "next", "last",
                    "first", "final", "quick", "main", "urgent", "important",
                ],
                PosTag::Adjective,
            ),
            (&["and", "or", "but", "nor", "yet", "so"], PosTag::Conjunction),
            (
                &[
                    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
                    "cannot", "can't", "won't", "wouldn't", "shouldn't", "couldn't", "mustn't",
                ],
                PosTag::Modal,
            ),
            (&["to"], PosTag::To),
            (
                &["who", "whom", "whose", "what", "which", "when", "where", "why", "how"],
                PosTag::WhWord,
            ),
            (
                &[
                    "not", "also", "very", "too", "just", "only", "still", "already", "soon",
                    "now", "then", "today", "tomorrow", "yesterday", "tonight", "asap", "here",
                    "there", "again", "always", "never", "often", "really", "ever", "maybe",
                ],
                PosTag::Adverb,
            ),
            (
                &["hi", "hello", "hey", "ok", "okay", "yes", "oh", "thanks", "cheers"],
                PosTag::Interjection,
            ),
            (&["be"], PosTag::Verb),
            (
                &["am", "are", "have", "do", "don't", "aren't", "haven't"],
                PosTag::VerbPresent,
            ),
            (
                &["is", "has", "does", "isn't", "hasn't", "doesn't"],
                PosTag::VerbThirdPerson,
            ),
            (
                &["was", "were", "had", "did", "wasn't", "weren't", "hadn't", "didn't"],
                PosTag::VerbPast,
            ),
            (&["been", "done"], PosTag::VerbParticiple),
            (&["being", "having", "doing"], PosTag::VerbGerund),
        ];

        groups
            .iter()
            .flat_map(|(words, tag)| words.iter().map(move |w| (*w, *tag)))
            .collect()
    }

    fn create_irregular_forms() -> HashMap<&'static str, PosTag> {
        let past = [
            "went", "sent", "made", "took", "wrote", "gave", "told", "came", "left", "built",
            "ran", "began", "saw", "knew", "thought", "brought", "bought", "met", "kept",
            "held", "paid", "found", "got", "said", "spent", "lost", "felt", "led",
        ];
        let participles = [
            "written", "taken", "given", "gone", "seen", "known", "begun", "broken", "chosen",
            "forgotten", "shown", "driven",
        ];

        past.iter()
            .map(|w| (*w, PosTag::VerbPast))
            .chain(participles.iter().map(|w| (*w, PosTag::VerbParticiple)))
            .collect()
    }
}

const VERB_BASES: &[&str] = &[
    "review", "send", "fix", "deploy", "test", "schedule", "assign", "update", "check",
    "write", "call", "email", "prepare", "finish", "complete", "submit", "merge", "ship",
    "create", "make", "take", "get", "go", "need", "want", "let", "add", "remove", "delete",
    "move", "share", "follow", "ask", "tell", "confirm", "approve", "book", "plan", "draft",
    "organize", "organise", "set", "run", "build", "release", "publish", "post", "upload",
    "download", "install", "configure", "migrate", "refactor", "document", "investigate",
    "look", "find", "help", "start", "stop", "begin", "finalize", "close", "open", "reply",
    "respond", "contact", "ping", "remind", "notify", "discuss", "meet", "sync", "align",
    "coordinate", "handle", "resolve", "clean", "verify", "validate", "read", "sign", "pay",
    "order", "buy", "print", "file", "track", "monitor", "prioritize", "escalate", "lead",
    "present", "join", "attend", "arrange", "cancel", "reschedule", "invite", "bring",
    "keep", "give", "put", "try", "use", "think", "know", "see", "come", "say", "work",
    "talk", "pick", "drop", "push", "pull", "commit", "rebase", "revert", "restart",
    "reboot", "analyze", "analyse", "collect", "gather", "compile", "estimate", "calculate",
    "research", "explore", "design", "implement", "debug", "patch", "upgrade", "measure",
    "summarize", "note", "report", "log", "record", "forward", "demo", "train", "hire",
    "interview", "edit", "proofread", "translate", "ensure", "provide", "fill", "sort",
    "clarify", "double-check", "follow-up", "wrap", "hand", "loop", "circulate",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

// "-ed" words that are not past forms
const ED_NON_VERBS: &[&str] = &[
    "hundred", "need", "feed", "speed", "seed", "deed", "breed", "greed", "weed", "indeed",
    "exceed", "proceed", "succeed", "bed", "red", "shed",
];

const ING_NOUNS: &[&str] = &[
    "morning", "evening", "nothing", "something", "anything", "everything", "string",
    "spring", "wedding", "ceiling", "during", "meeting", "building", "thing",
];
