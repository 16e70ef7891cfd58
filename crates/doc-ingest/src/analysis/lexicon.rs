//! Word lists shared by every analysis stage.
//!
//! Built once on first use and read-only afterwards, so concurrent
//! preprocessing runs share it without locking.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stop words (NLTK list)
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Tokens that end with a period without ending a sentence (lower case, no final dot)
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co",
    "corp", "dept", "approx", "fig", "figs", "vol", "vols", "no", "nos", "pp",
    "gen", "gov", "sen", "rep", "rev", "capt", "col", "lt", "sgt", "ave", "blvd", "rd", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "e.g", "i.e",
    "u.s", "u.k", "a.m", "p.m", "al", "cf", "ca",
];

/// Common verbs: base forms plus irregular past forms. Regular `-s`/`-ed`
/// inflections are derived in [`Lexicon::is_verb`]. Words that are mostly
/// nouns ("report", "plan", "increase") are left out.
const VERBS: &[&str] = &[
    "accept", "achieve", "add", "agree", "allow", "analyse", "analyze", "announce", "appear",
    "apply", "approve", "argue", "arrive", "ask", "assume", "become", "begin", "believe",
    "belong", "bring", "buy", "choose", "claim", "come", "compare", "complete", "confirm",
    "consider", "contain", "continue", "create", "decide", "decline", "deliver", "depend",
    "describe", "determine", "develop", "discuss", "drive", "employ", "enable", "ensure",
    "establish", "estimate", "expand", "expect", "explain", "feel", "find", "follow", "get",
    "give", "go", "grow", "happen", "hire", "hold", "identify", "improve", "include",
    "indicate", "introduce", "involve", "join", "keep", "know", "lead", "learn", "leave",
    "lose", "maintain", "make", "manage", "mean", "meet", "move", "obtain", "occur", "operate",
    "pay", "prefer", "prepare", "produce", "propose", "protect", "provide", "publish", "raise",
    "reach", "receive", "recommend", "reduce", "reflect", "remain", "remove", "replace",
    "require", "respond", "reveal", "say", "see", "seem", "sell", "send", "serve", "show",
    "speak", "spend", "stay", "suggest", "take", "tell", "tend", "think", "try", "understand",
    "want", "warn", "win", "write", "began", "begun", "became", "brought", "bought", "came",
    "chose", "chosen", "drove", "driven", "fell", "fallen", "felt", "found", "gave", "given",
    "got", "gotten", "went", "gone", "grew", "grown", "held", "kept", "knew", "known", "led",
    "learnt", "lost", "made", "meant", "met", "paid", "rose", "risen", "said", "saw", "seen",
    "sold", "sent", "spoke", "spoken", "spent", "took", "taken", "told", "thought",
    "understood", "wrote", "written",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "no", "another", "either", "neither", "several",
    "many", "both", "all",
];

/// Titles that precede a personal name
const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "professor", "sir", "dame", "lord", "lady",
    "president", "senator", "governor", "mayor", "judge", "rev", "reverend", "capt", "captain",
    "col", "colonel", "gen", "lt", "sgt", "minister", "chancellor", "king", "queen",
    "prince", "princess",
];

/// Words marking an organisation name
const ORG_WORDS: &[&str] = &[
    "inc", "incorporated", "corp", "corporation", "ltd", "llc", "plc", "gmbh", "co", "company",
    "group", "holdings", "partners", "university", "college", "institute", "school", "academy",
    "association", "foundation", "society", "agency", "bank", "department", "ministry",
    "council", "committee", "commission", "bureau", "office", "federation", "union",
    "organization", "organisation", "laboratories", "labs", "technologies", "systems",
    "solutions", "software", "networks", "airlines", "motors", "industries", "party", "fund",
    "board", "authority", "team", "club",
];

const EVENT_WORDS: &[&str] = &[
    "war", "battle", "summit", "conference", "olympics", "games", "championship", "cup",
    "festival", "expo", "exhibition", "revolution", "election", "crisis", "hurricane",
    "tournament", "symposium", "forum", "marathon", "award", "awards",
];

const FACILITY_WORDS: &[&str] = &[
    "airport", "bridge", "tower", "station", "stadium", "arena", "hospital", "museum",
    "highway", "building", "center", "centre", "hall", "palace", "church", "cathedral",
    "library", "terminal", "port", "harbor", "harbour", "tunnel", "dam", "square", "park",
];

const LOCATION_WORDS: &[&str] = &[
    "river", "lake", "mountain", "mountains", "ocean", "sea", "valley", "desert", "island",
    "islands", "bay", "gulf", "peninsula", "forest", "canyon", "coast", "strait", "basin",
    "plateau", "alps", "himalayas", "region",
];

const LAW_WORDS: &[&str] = &[
    "act", "treaty", "amendment", "constitution", "code", "regulation", "directive", "accord",
    "convention", "charter", "bill", "statute", "protocol",
];

const WORK_OF_ART_CUES: &[&str] = &[
    "book", "novel", "film", "movie", "song", "album", "poem", "painting", "play", "opera",
    "series", "show", "titled", "entitled",
];

const GPES: &[&str] = &[
    "afghanistan", "albania", "algeria", "argentina", "armenia", "australia", "austria",
    "bangladesh", "belgium", "bolivia", "brazil", "bulgaria", "cambodia", "cameroon", "canada",
    "chile", "china", "colombia", "croatia", "cuba", "cyprus", "czechia", "denmark", "ecuador",
    "egypt", "england", "estonia", "ethiopia", "finland", "france", "germany", "ghana",
    "greece", "hungary", "iceland", "india", "indonesia", "iran", "iraq", "ireland", "israel",
    "italy", "jamaica", "japan", "jordan", "kenya", "korea", "kuwait", "latvia", "lebanon",
    "lithuania", "luxembourg", "malaysia", "mexico", "morocco", "nepal", "netherlands",
    "new zealand", "nigeria", "north korea", "norway", "pakistan", "peru", "philippines",
    "poland", "portugal", "qatar", "romania", "russia", "saudi arabia", "scotland", "serbia",
    "singapore", "slovakia", "slovenia", "south africa", "south korea", "spain", "sri lanka",
    "sweden", "switzerland", "syria", "taiwan", "thailand", "tunisia", "turkey", "uganda",
    "ukraine", "united kingdom", "united states", "united states of america", "uruguay",
    "venezuela", "vietnam", "wales", "yemen", "zimbabwe", "usa", "us", "uk", "uae", "eu",
    "amsterdam", "athens", "atlanta", "austin", "bangkok", "barcelona", "beijing", "berlin",
    "boston", "brussels", "buenos aires", "cairo", "chicago", "copenhagen", "dallas", "delhi",
    "new delhi", "denver", "dubai", "dublin", "edinburgh", "geneva", "hong kong", "houston",
    "istanbul", "jakarta", "lagos", "lisbon", "london", "los angeles", "madrid", "manchester",
    "melbourne", "miami", "milan", "montreal", "moscow", "mumbai", "munich", "nairobi",
    "new york", "new york city", "oslo", "ottawa", "paris", "philadelphia", "prague", "rome",
    "san francisco", "seattle", "seoul", "shanghai", "stockholm", "sydney", "tokyo", "toronto",
    "vancouver", "vienna", "warsaw", "washington", "zurich", "alabama", "alaska", "arizona",
    "california", "colorado", "florida", "georgia", "hawaii", "illinois", "indiana", "iowa",
    "kansas", "kentucky", "louisiana", "maryland", "massachusetts", "michigan", "minnesota",
    "missouri", "nevada", "new jersey", "new mexico", "north carolina", "ohio", "oklahoma",
    "oregon", "pennsylvania", "tennessee", "texas", "utah", "vermont", "virginia", "wisconsin",
    "europe", "asia", "africa",
];

const NORPS: &[&str] = &[
    "american", "americans", "british", "canadian", "chinese", "dutch", "english", "european",
    "europeans", "french", "german", "germans", "greek", "indian", "indians", "irish",
    "italian", "italians", "japanese", "korean", "mexican", "mexicans", "russian", "russians",
    "spanish", "swedish", "swiss", "african", "asian", "arab", "arabs", "australian",
    "brazilian", "christian", "christians", "muslim", "muslims", "jewish", "jews", "hindu",
    "buddhist", "catholic", "protestant", "democrat", "democrats", "democratic", "republican",
    "republicans", "conservative", "liberal", "socialist",
];

const LANGUAGES: &[&str] = &[
    "english", "french", "spanish", "german", "chinese", "mandarin", "cantonese", "japanese",
    "arabic", "russian", "portuguese", "hindi", "bengali", "italian", "korean", "latin",
    "dutch", "greek", "hebrew", "swedish", "turkish", "polish", "urdu", "swahili",
];

/// Words that turn a preceding nationality adjective into a language name
const LANGUAGE_CUES: &[&str] = &[
    "in", "speak", "speaks", "spoke", "spoken", "speaking", "translated", "into", "learn",
    "learning", "fluent",
];

const PRODUCTS: &[&str] = &[
    "iphone", "ipad", "macbook", "android", "windows", "linux", "excel", "powerpoint",
    "playstation", "xbox", "kindle", "chrome", "firefox", "photoshop", "tesla model s",
    "model s", "model 3", "galaxy", "pixel", "chatgpt", "python", "java", "javascript",
    "rust", "docker", "kubernetes", "postgresql", "mysql",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Relative or period words that form a date on their own or after a number
const DATE_WORDS: &[&str] = &[
    "today", "yesterday", "tomorrow", "day", "days", "week", "weeks", "weekend", "month",
    "months", "year", "years", "decade", "decades", "century", "centuries", "quarter",
    "quarters", "annually",
];

const TIME_WORDS: &[&str] = &[
    "am", "pm", "a.m", "p.m", "oclock", "hour", "hours", "minute", "minutes", "second",
    "seconds", "morning", "afternoon", "evening", "night", "tonight", "noon", "midnight",
];

const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "usd", "euro", "euros", "eur", "pound", "pounds", "gbp", "sterling",
    "yen", "jpy", "yuan", "rmb", "rupee", "rupees", "franc", "francs", "cent", "cents", "won",
    "peso", "pesos", "bitcoin",
];

const UNIT_WORDS: &[&str] = &[
    "km", "kilometer", "kilometers", "kilometre", "kilometres", "m", "meter", "meters", "metre",
    "metres", "cm", "mm", "mile", "miles", "foot", "feet", "inch", "inches", "yard", "yards",
    "kg", "kilogram", "kilograms", "g", "gram", "grams", "lb", "lbs", "ton", "tons", "tonnes",
    "ounce", "ounces", "liter", "liters", "litre", "litres", "gallon", "gallons", "acre",
    "acres", "hectare", "hectares", "degree", "degrees", "kb", "mb", "gb", "tb", "mph", "kmh",
    "watts", "kw", "kwh", "mw", "volts",
];

const PERCENT_WORDS: &[&str] = &["percent", "percentage", "pct"];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth", "thousandth",
];

/// Word lists for segmentation, entity rules and key-phrase filtering
#[derive(Debug)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    org_words: HashSet<&'static str>,
    event_words: HashSet<&'static str>,
    facility_words: HashSet<&'static str>,
    location_words: HashSet<&'static str>,
    law_words: HashSet<&'static str>,
    work_of_art_cues: HashSet<&'static str>,
    gpes: HashSet<&'static str>,
    norps: HashSet<&'static str>,
    languages: HashSet<&'static str>,
    language_cues: HashSet<&'static str>,
    products: HashSet<&'static str>,
    months: HashSet<&'static str>,
    weekdays: HashSet<&'static str>,
    date_words: HashSet<&'static str>,
    time_words: HashSet<&'static str>,
    currency_words: HashSet<&'static str>,
    unit_words: HashSet<&'static str>,
    percent_words: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    ordinal_words: HashSet<&'static str>,
    longest_name: usize,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// Process-wide lexicon, initialised on first call
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Candidate base forms of a regularly inflected verb
fn verb_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();
    for suffix in ["s", "es", "d", "ed"] {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.chars().count() < 3 {
            continue;
        }
        stems.push(stem.to_string());

        if let Some(base) = stem.strip_suffix('i') {
            // "applies", "applied"
            stems.push(format!("{}y", base));
        }
        let mut tail = stem.chars().rev();
        if suffix == "ed" && tail.next().is_some_and(|last| Some(last) == tail.next()) {
            // "shipped", "planned"
            let mut base = stem.to_string();
            base.pop();
            stems.push(base);
        }
    }
    stems
}

fn most_words(lists: &[&[&str]]) -> usize {
    lists
        .iter()
        .flat_map(|list| list.iter())
        .map(|entry| entry.split_whitespace().count())
        .max()
        .unwrap_or(1)
}

macro_rules! lookup {
    ($(#[$doc:meta])* $name:ident => $field:ident) => {
        $(#[$doc])*
        pub fn $name(&self, word: &str) -> bool {
            self.$field.contains(word.to_lowercase().as_str())
        }
    };
}

impl Lexicon {
    fn build() -> Self {
        let lexicon = Self {
            stop_words: set(STOP_WORDS),
            abbreviations: set(ABBREVIATIONS),
            verbs: set(VERBS),
            determiners: set(DETERMINERS),
            honorifics: set(HONORIFICS),
            org_words: set(ORG_WORDS),
            event_words: set(EVENT_WORDS),
            facility_words: set(FACILITY_WORDS),
            location_words: set(LOCATION_WORDS),
            law_words: set(LAW_WORDS),
            work_of_art_cues: set(WORK_OF_ART_CUES),
            gpes: set(GPES),
            norps: set(NORPS),
            languages: set(LANGUAGES),
            language_cues: set(LANGUAGE_CUES),
            products: set(PRODUCTS),
            months: set(MONTHS),
            weekdays: set(WEEKDAYS),
            date_words: set(DATE_WORDS),
            time_words: set(TIME_WORDS),
            currency_words: set(CURRENCY_WORDS),
            unit_words: set(UNIT_WORDS),
            percent_words: set(PERCENT_WORDS),
            number_words: set(NUMBER_WORDS),
            ordinal_words: set(ORDINAL_WORDS),
            longest_name: most_words(&[GPES, PRODUCTS]),
        };
        tracing::debug!(
            "Lexicon ready: {} stop words, {} places",
            lexicon.stop_words.len(),
            lexicon.gpes.len()
        );
        lexicon
    }

    lookup!(
        /// Case-insensitive stop-word check
        is_stop_word => stop_words
    );
    lookup!(
        /// Word (without its trailing period) is a known abbreviation
        is_abbreviation => abbreviations
    );
    lookup!(is_determiner => determiners);
    lookup!(is_honorific => honorifics);
    lookup!(is_org_word => org_words);
    lookup!(is_event_word => event_words);
    lookup!(is_facility_word => facility_words);
    lookup!(is_location_word => location_words);
    lookup!(is_law_word => law_words);
    lookup!(is_work_of_art_cue => work_of_art_cues);
    lookup!(
        /// Countries, states and cities; multi-word names are space-joined
        is_gpe => gpes
    );
    lookup!(is_norp => norps);
    lookup!(is_language => languages);
    lookup!(is_language_cue => language_cues);
    lookup!(is_product => products);
    lookup!(is_month => months);
    lookup!(is_weekday => weekdays);
    lookup!(is_date_word => date_words);
    lookup!(is_time_word => time_words);
    lookup!(is_currency_word => currency_words);
    lookup!(is_unit_word => unit_words);
    lookup!(is_percent_word => percent_words);
    lookup!(is_number_word => number_words);
    lookup!(is_ordinal_word => ordinal_words);

    /// Listed verb, or a regular `-s`, `-es`, `-d` or `-ed` form of one
    /// ("leads", "approved", "shipped", "applies").
    pub fn is_verb(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.verbs.contains(lower.as_str())
            || verb_stems(&lower).iter().any(|stem| self.verbs.contains(stem.as_str()))
    }

    /// Word count of the longest multi-word place or product name
    pub fn longest_name(&self) -> usize {
        self.longest_name
    }
}
