use once_cell::sync::Lazy;

use crate::duration::TimeUnit;
use crate::locale::{LexiconBuilder, Lexicon};

pub(crate) static ENGLISH: Lexicon = Lexicon {
    splitter: || {
        regex!(
            r#"(?:([0-9]+)|([,.:;!?'"/\\()\[\]{}+\-*%‰&<>=#@$€£^~|’])|([^\s0-9,.:;!?'"/\\()\[\]{}+\-*%‰&<>=#@$€£^~|’]+))(\s*)"#
        )
    },
    raw_number_categories: &["number", "raw"],
    plural_endings: &["s", "es"],
    entries: Lazy::new(build),
};

fn build() -> std::collections::HashMap<&'static str, crate::locale::Entry> {
    let mut b = LexiconBuilder::default();
    numbers(&mut b);
    punctuation(&mut b);
    relative(&mut b);
    time_of_day(&mut b);
    calendar(&mut b);
    durations(&mut b);
    b.build()
}

fn numbers(b: &mut LexiconBuilder) {
    b.integers(
        &["number", "digit", "digit_after_point"],
        &[
            ("zero", 0),
            ("nought", 0),
            ("naught", 0),
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
        ],
    )
    .integers(&["number", "digit_after_point"], &[("oh", 0)])
    .integers(&["number", "digit_after_point", "pre_oclock"], &[("o", 0)])
    .integers(
        &["number", "teen"],
        &[
            ("ten", 10),
            ("eleven", 11),
            ("twelve", 12),
            ("thirteen", 13),
            ("fourteen", 14),
            ("fifteen", 15),
            ("sixteen", 16),
            ("seventeen", 17),
            ("eighteen", 18),
            ("nineteen", 19),
        ],
    )
    .integers(
        &["number", "tens"],
        &[
            ("twenty", 20),
            ("thirty", 30),
            ("forty", 40),
            ("fifty", 50),
            ("sixty", 60),
            ("seventy", 70),
            ("eighty", 80),
            ("ninety", 90),
        ],
    )
    .integers(&["number", "hundred"], &[("hundred", 100)])
    .integers(
        &["number", "multiplier"],
        &[
            ("thousand", 1_000),
            ("million", 1_000_000),
            ("billion", 1_000_000_000),
            ("trillion", 1_000_000_000_000),
            ("quadrillion", 1_000_000_000_000_000),
            ("quintillion", 1_000_000_000_000_000_000),
        ],
    );

    b.ordinals(
        &["number", "digit", "ordinal"],
        &[
            ("zeroth", 0),
            ("first", 1),
            ("second", 2),
            ("third", 3),
            ("fourth", 4),
            ("fifth", 5),
            ("sixth", 6),
            ("seventh", 7),
            ("eighth", 8),
            ("ninth", 9),
        ],
    )
    .ordinals(
        &["number", "teen", "ordinal"],
        &[
            ("tenth", 10),
            ("eleventh", 11),
            ("twelfth", 12),
            ("thirteenth", 13),
            ("fourteenth", 14),
            ("fifteenth", 15),
            ("sixteenth", 16),
            ("seventeenth", 17),
            ("eighteenth", 18),
            ("nineteenth", 19),
        ],
    )
    .ordinals(
        &["number", "tens", "ordinal"],
        &[
            ("twentieth", 20),
            ("thirtieth", 30),
            ("fortieth", 40),
            ("fiftieth", 50),
            ("sixtieth", 60),
            ("seventieth", 70),
            ("eightieth", 80),
            ("ninetieth", 90),
        ],
    )
    .ordinals(&["number", "hundred", "ordinal"], &[("hundredth", 100)])
    .ordinals(
        &["number", "multiplier", "ordinal"],
        &[
            ("thousandth", 1_000),
            ("millionth", 1_000_000),
            ("billionth", 1_000_000_000),
            ("trillionth", 1_000_000_000_000),
            ("quadrillionth", 1_000_000_000_000_000),
            ("quintillionth", 1_000_000_000_000_000_000),
        ],
    );

    b.decimals(
        &["number", "suffix_multiplier"],
        &[("half", 0.5), ("halves", 0.5), ("quarter", 0.25), ("percent", 0.01), ("%", 0.01), ("‰", 0.001)],
    )
    .integers(
        &["number", "suffix_multiplier"],
        &[("dozen", 12), ("score", 20), ("gross", 144), ("pair", 2), ("couple", 2)],
    );
}

fn punctuation(b: &mut LexiconBuilder) {
    b.words(&["sign", "negative"], &["minus", "negative"])
        .words(&["sign"], &["plus", "+"])
        .words(&["sign", "negative", "ignore", "date_time_ignore"], &["-"])
        .words(&["point"], &["point"])
        .words(&["point", "post_oclock"], &["dot"])
        .words(&["point", "date_time_ignore"], &["."])
        .words(&["ignore", "thousand_separator", "date_time_ignore"], &[","])
        .words(&["fraction_separator", "date_time_ignore"], &["/"])
        .words(&["fraction_separator"], &["over", "divided"])
        .words(&["fraction_separator_secondary"], &["by"])
        .words(&["ordinal_suffix"], &["st", "nd", "rd", "th"])
        .words(&["ignore", "article", "date_time_ignore", "ampm_before", "bcad_after"], &["a"])
        .words(&["ignore", "article"], &["an"])
        .words(&["ignore", "date_time_ignore"], &["and"])
        .words(&["duration_separator", "date_time_ignore"], &["of"])
        .words(&["date_time_ignore", "day_adder_the", "pre_hour", "pre_special_hour"], &["the"])
        .words(&["pre_hour", "pre_special_hour"], &["at"])
        .words(&["pre_relative_indicator", "date_time_ignore"], &["in", "within"])
        .words(&["date_time_ignore", "pre_oclock"], &["on"])
        .words(&["date_time_ignore"], &["from", ":", "'", "’"]);
}

fn relative(b: &mut LexiconBuilder) {
    b.words(&["pre_relative_indicator"], &["next"])
        .words(&["pre_relative_indicator", "negative"], &["last", "previous"])
        .words(&["pre_relative_indicator", "negative", "special_minute_after"], &["past"])
        .words(&["post_relative_indicator", "negative"], &["ago"])
        .words(
            &[
                "pre_relative_indicator",
                "post_relative_indicator",
                "negative",
                "pre_special_hour",
                "special_minute_before",
                "day_adder_before",
                "bcad_before",
            ],
            &["before"],
        )
        .words(
            &[
                "pre_relative_indicator",
                "post_relative_indicator",
                "pre_special_hour",
                "special_minute_after",
                "day_adder_after",
            ],
            &["after"],
        )
        .words(&["post_relative_indicator"], &["later", "hence"])
        .words(&["pre_special_hour"], &["this", "these"])
        .words(&["special_minute_before"], &["to", "till", "til"]);
}

fn time_of_day(b: &mut LexiconBuilder) {
    b.integers(
        &["moment_of_day", "noon_midnight_like"],
        &[("midnight", 0), ("noon", 12), ("midday", 12)],
    )
    .integers(
        &["moment_of_day"],
        &[
            ("dawn", 6),
            ("sunrise", 6),
            ("breakfast", 8),
            ("morning", 9),
            ("lunch", 12),
            ("lunchtime", 12),
            ("afternoon", 15),
            ("sunset", 19),
            ("dusk", 19),
            ("dinner", 20),
            ("dinnertime", 20),
            ("evening", 21),
            ("night", 23),
            ("tonight", 23),
        ],
    );

    b.words(&["post_oclock"], &["clock"])
        .words(&["oclock_combined"], &["oclock", "exact", "sharp"])
        .words(&["ampm_before_combined"], &["am"])
        .words(&["ampm_after_combined"], &["pm"])
        .words(&["ampm_before"], &["ante"])
        .words(&["ampm_after"], &["p", "post"])
        .words(&["ampm_identifier"], &["m", "meridiem"]);

    b.words(&["bcad_before_combined"], &["bc", "bce"])
        .words(&["bcad_after_combined"], &["ad", "ce"])
        .words(&["bcad_before"], &["b"])
        .words(&["bcad_after"], &["anno"])
        .words(&["bcad_identifier"], &["domini", "christ", "c", "d"])
        .words(&["bcad_after", "bcad_identifier"], &["current", "common"])
        .words(&["bcad_identifier", "bcad_era"], &["era"])
        .words(&["bcad_era"], &["e"]);
}

fn calendar(b: &mut LexiconBuilder) {
    b.integers(
        &["day_of_week"],
        &[
            ("monday", 0),
            ("mon", 0),
            ("tuesday", 1),
            ("tue", 1),
            ("tues", 1),
            ("wednesday", 2),
            ("wed", 2),
            ("thursday", 3),
            ("thu", 3),
            ("thur", 3),
            ("thurs", 3),
            ("friday", 4),
            ("fri", 4),
            ("saturday", 5),
            ("sat", 5),
            ("sunday", 6),
            ("sun", 6),
        ],
    )
    .integers(
        &["month_name"],
        &[
            ("january", 1),
            ("jan", 1),
            ("february", 2),
            ("feb", 2),
            ("march", 3),
            ("mar", 3),
            ("april", 4),
            ("apr", 4),
            ("may", 5),
            ("june", 6),
            ("jun", 6),
            ("july", 7),
            ("jul", 7),
            ("august", 8),
            ("aug", 8),
            ("september", 9),
            ("sep", 9),
            ("sept", 9),
            ("october", 10),
            ("oct", 10),
            ("november", 11),
            ("nov", 11),
            ("december", 12),
            ("dec", 12),
        ],
    );

    b.words(&["today"], &["today"])
        .words(&["tomorrow"], &["tomorrow", "morrow"])
        .words(&["yesterday"], &["yesterday"])
        .words(&["day_adder_day"], &["day"])
        .words(&["pre_hour"], &["hour"]);
}

fn durations(b: &mut LexiconBuilder) {
    b.durations(TimeUnit::Nanos, &["nanosecond"])
        .restricted_durations(TimeUnit::Nanos, &["ns"])
        .durations(TimeUnit::Micros, &["microsecond", "μs"])
        .durations(TimeUnit::Millis, &["millisecond"])
        .restricted_durations(TimeUnit::Millis, &["ms"])
        .durations(TimeUnit::Seconds, &["second", "sec"])
        .restricted_durations(TimeUnit::Seconds, &["s"])
        .durations(TimeUnit::Minutes, &["minute", "min"])
        .restricted_durations(TimeUnit::Minutes, &["m"])
        .durations(TimeUnit::Hours, &["hour", "hr"])
        .restricted_durations(TimeUnit::Hours, &["h"])
        .durations(TimeUnit::Days, &["day"])
        .restricted_durations(TimeUnit::Days, &["d"])
        .durations(TimeUnit::Weeks, &["week", "wk"])
        .restricted_durations(TimeUnit::Weeks, &["w"])
        .durations(TimeUnit::Months, &["month"])
        .restricted_durations(TimeUnit::Months, &["mo"])
        .durations(TimeUnit::Years, &["year", "yr"])
        .durations(TimeUnit::Decades, &["decade"])
        .durations(TimeUnit::Centuries, &["century", "centuries"])
        .durations(TimeUnit::Millennia, &["millennium", "millennia"]);
}
