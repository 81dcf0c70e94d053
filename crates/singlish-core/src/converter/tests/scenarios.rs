//! Everyday sentences typed the way users type them.

use super::super::convert;

fn assert_contains(input: &str, expected: &[&str]) {
    let output = convert(input);
    for e in expected {
        assert!(
            output.contains(e),
            "{input:?} -> {output:?}, missing {e:?}"
        );
    }
}

#[test]
fn test_simple_sentences() {
    assert_contains("mama gedhara yanavaa.", &["මම", "ගෙදර"]);
    assert_contains("mata bath oonee.", &["මට", "බත්"]);
    assert_contains("api paasal yanavaa.", &["අපි", "පාසල්"]);
    assert_eq!(convert("mama gedhara yanavaa."), "මම ගෙදර යනවා.");
}

#[test]
fn test_compound_sentences() {
    assert_contains(
        "mama gedhara yanavaa, haebaeyi vahina nisaa dhaenma yannee naee.",
        &["මම", "හැබැයි", "නෑ", "යන්නේ"],
    );
    assert_contains(
        "api kaeema kanna yanavaa saha passe chithrapatayakuth balanavaa.",
        &["අපි", "කෑම", "කන්න", "බලනවා"],
    );
}

#[test]
fn test_complex_sentences() {
    assert_contains("oya enavaanam mama balan innavaa.", &["ඔය", "මම", "එනවානම්"]);
    assert_contains(
        "mama sunaQQgu vunee maarga thadhabadhaya nisaa.",
        &["සුනංගු", "මාර්ග"],
    );
}

#[test]
fn test_questions() {
    assert_contains("oyaata kohomadha?", &["ඔයාට", "කොහොමද", "?"]);
    assert_contains("oyaa kavadhdha enna hithan inne?", &["කවද්ද", "එන්න"]);
}

#[test]
fn test_commands() {
    assert_contains("vahaama enna.", &["වහාම", "එන්න"]);
    assert_contains("mata kiyanna.", &["මට", "කියන්න"]);
}

#[test]
fn test_negatives() {
    assert_contains("mama ehema karannee naehae.", &["මම", "නැහැ", "කරන්නේ"]);
    assert_contains("api heta ennee naehae.", &["අපි", "නැහැ"]);
}

#[test]
fn test_greetings_and_requests() {
    assert_contains("suba udhaeesanak!", &["සුබ", "උදෑසනක්"]);
    assert_contains(
        "karuNaakaralaa mata podi udhavvak karanna puLuvandha?",
        &["කරුණාකර", "මට", "පුළුවන්ද"],
    );
}

#[test]
fn test_mixed_language() {
    assert_contains("Zoom meeting ekak thiyennee.", &["Zoom", "meeting", "තියෙන්නේ"]);
    assert_contains("Lamayi school yannee vaeen ekee.", &["school", "ළමයි"]);
    assert_contains(
        "nimaali office enna late vennee traffic nisaa.",
        &["office", "traffic", "late"],
    );
}

#[test]
fn test_tenses() {
    assert_contains("mama iiyee gedhara giyaa.", &["මම", "ගිය", "ඊයේ"]);
    assert_contains("mama heta enavaa.", &["මම", "හෙට", "එනවා"]);
}

#[test]
fn test_long_paragraph() {
    let input = "dhitvaa suLi kuNaatuva samaGa aethi vuu gQQvathura saha naayayaeem \
        heethuven maarga sQQvarDhana aDhikaariya sathu maarga kotas 430k vinaashayata \
        pathva aethi athara, ehi samastha dhiga pramaaNaya kiloomiitar 300k pamaNa \
        vana bava pravaahana,mahaamaarga saha naagarika sQQvarDhana amaathYA bimal \
        rathnaayaka saDHahan kaLeeya.";
    let output = convert(input);
    assert!(output.chars().count() > 100);
    for expected in ["ගංවතුර", "සංවර්ධන", "430k", "සඳහන්", "කළේය", ","] {
        assert!(output.contains(expected), "missing {expected:?} in {output:?}");
    }
}

#[test]
fn test_informal() {
    assert!(!convert("ela machan! supiri!!").is_empty());
    assert_contains("ela machan! supiri!!", &["මචං", "!!"]);
    assert_contains("dhaen ithin monavadha karanne?", &["මොනවද", "කරන්නේ"]);
    assert_contains("mama gedhara yanavaa! oyaa enavadha?", &["මම", "එනවාද"]);
}

#[test]
fn test_nothing_to_convert() {
    assert_eq!(convert("@@@###$$$"), "");
    assert_eq!(convert(""), "");
    assert_eq!(convert("     "), "");
    assert_eq!(convert("1234567890"), "");
}

#[test]
fn test_run_on_word_is_dropped() {
    let input = "mamagedharayanavaaekaharignanaehaemakaranneepahasunavaedhayatanisaamathehelthehelthehelthehelthehel";
    assert_eq!(convert(input), "");
}
