// Test fixtures for integration tests
// WHY: Shared corpora and golden outputs keep the integration suites consistent

#![allow(dead_code)]

pub const THOU_ART_CSV: &str = "1,Thou art wise\n2,Thou art kind\n";

pub const THOU_ART_RULES: &str = r#"
tokens = [["thou", "you"], ["art", "are"]]
"#;

pub const THOU_ART_MODERNIZED: &str = "id,text\n1,You are wise\n2,You are kind\n";

pub const THOU_ART_TOKENS: &str = "token,verses,ids
you,2,\"[1,2]\"
are,2,\"[1,2]\"
wise,1,\"[1]\"
kind,1,\"[2]\"
";

/// Tokens of the unmodernized thou/art corpus
pub const THOU_ART_RAW_TOKENS: &str = "token,verses,ids
thou,2,\"[1,2]\"
art,2,\"[1,2]\"
wise,1,\"[1]\"
kind,1,\"[2]\"
";

pub const NO_STOPWORDS: &str = "words = []\n";

pub const GENESIS_CSV: &str = "gen.1.1,In the beginning God created the heaven and the earth.
gen.1.3,\"And God said, Let there be light: and there was light.\"
gen.3.9,\"And the LORD God called unto the man, and said unto him, Where art thou?\"
gen.22.1,\"And it came to pass after these things, that God did prove Abraham, and said unto him, Abraham; and he said, Here am I.\"
";

pub const GENESIS_MODERNIZED: &str = "id,text
gen.1.1,In the beginning God created the heaven and the earth.
gen.1.3,\"And God said, Let there be light: and there was light.\"
gen.3.9,\"And the LORD God called to the man, and said to him, Where are you?\"
gen.22.1,\"And it happened after these things, that God did prove Abraham, and said to him, Abraham; and he said, Here am I.\"
";

pub const GENESIS_TOKENS: &str = "token,verses,ids
god,4,\"[gen.1.1,gen.1.3,gen.3.9,gen.22.1]\"
beginning,1,\"[gen.1.1]\"
created,1,\"[gen.1.1]\"
heaven,1,\"[gen.1.1]\"
earth,1,\"[gen.1.1]\"
light,1,\"[gen.1.3]\"
lord,1,\"[gen.3.9]\"
called,1,\"[gen.3.9]\"
man,1,\"[gen.3.9]\"
where,1,\"[gen.3.9]\"
art,1,\"[gen.3.9]\"
came,1,\"[gen.22.1]\"
pass,1,\"[gen.22.1]\"
things,1,\"[gen.22.1]\"
prove,1,\"[gen.22.1]\"
abraham,1,\"[gen.22.1]\"
";

pub const GENESIS_TOKENS_LEXICAL_ORDER: &[&str] = &[
    "god", "abraham", "art", "beginning", "called", "came", "created", "earth", "heaven", "light",
    "lord", "man", "pass", "prove", "things", "where",
];
