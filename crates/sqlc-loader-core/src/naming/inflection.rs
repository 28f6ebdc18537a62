use regex::Regex;
use std::sync::LazyLock;

///
/// SINGULAR_RULES
/// English singular rules, most specific first
///
/// Uncountables, then irregulars, then the suffix rules. Each irregular and
/// suffix rule is tried upper-case, exact, then case-insensitive so that an
/// all-caps table keeps its casing.
///

static SINGULAR_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = Vec::new();

    for word in UNCOUNTABLE {
        rules.push(Rule::new(&format!("^(?i)({word})$"), "${1}"));
    }

    for (singular, plural) in IRREGULAR {
        rules.push(Rule::new(
            &format!("{}$", plural.to_uppercase()),
            &singular.to_uppercase(),
        ));
        rules.push(Rule::new(&format!("{}$", title(plural)), &title(singular)));
        rules.push(Rule::new(&format!("{plural}$"), singular));
    }

    for (find, replace) in SUFFIX.iter().rev() {
        rules.push(Rule::new(&find.to_uppercase(), &replace.to_uppercase()));
        rules.push(Rule::new(find, replace));
        rules.push(Rule::new(&format!("(?i){find}"), replace));
    }

    rules
});

const UNCOUNTABLE: [&str; 10] = [
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

const IRREGULAR: [(&str, &str); 6] = [
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mombie", "mombies"),
];

// least specific first; applied in reverse
const SUFFIX: [(&str, &str); 27] = [
    ("s$", ""),
    ("(ss)$", "${1}"),
    ("(n)ews$", "${1}ews"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    ("(^analy)(sis|ses)$", "${1}sis"),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(c)ookies$", "${1}ookie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("^(m|l)ice$", "${1}ouse"),
    ("(bus)(es)?$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|test)(is|es)$", "${1}is"),
    ("^(a)x[ie]s$", "${1}xis"),
    ("(octop|vir)(us|i)$", "${1}us"),
    ("(alias|status)(es)?$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
];

// words the suffix rules get wrong
const FIXED: [(&str, &str); 5] = [
    ("campus", "campus"),
    ("meta", "meta"),
    ("calories", "calorie"),
    ("waves", "wave"),
    ("metadata", "metadata"),
];

struct Rule {
    find: Regex,
    replace: String,
}

impl Rule {
    fn new(find: &str, replace: &str) -> Self {
        Self {
            find: Regex::new(find).expect("singular rule is a valid regex"),
            replace: replace.to_string(),
        }
    }
}

fn title(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Singular form of `word`, unless it is one of `exclusions` (compared
/// case-insensitively).
#[must_use]
pub fn singularize(word: &str, exclusions: &[String]) -> String {
    if exclusions.iter().any(|ex| ex.eq_ignore_ascii_case(word)) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if let Some((_, fixed)) = FIXED.iter().find(|(plural, _)| *plural == lower) {
        return (*fixed).to_string();
    }

    SINGULAR_RULES
        .iter()
        .find(|rule| rule.find.is_match(word))
        .map_or_else(
            || word.to_string(),
            |rule| {
                rule.find
                    .replace_all(word, rule.replace.as_str())
                    .into_owned()
            },
        )
}
