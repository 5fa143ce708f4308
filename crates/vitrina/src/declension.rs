//! Grammatical case lookup for region city names.
//!
//! Generated sentences need the prepositional ("в Симферополе") and dative
//! ("по Симферополю") forms of each city. Forms are looked up per region code
//! rather than computed linguistically; the table is small and closed.
//!
//! The lookup is total: a code not present in the table resolves to the
//! umbrella territory name ("Крыму"), never to an error.

/// Grammatical case of a city name used in generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityCase {
    /// "в Симферополе"
    Prepositional,
    /// "по Симферополю"
    Dative,
}

/// Region code that every unknown code falls back to.
pub const DEFAULT_REGION: &str = "default";

/// Forms for the umbrella territory rather than a specific city.
const DEFAULT_FORMS: (&str, &str) = ("Крыму", "Крыму");

/// City name of `code` in the requested grammatical case.
///
/// Total over all inputs: unknown codes yield the umbrella territory form.
pub fn city_form(code: &str, case: CityCase) -> &'static str {
    let (prepositional, dative) = forms(code).unwrap_or(DEFAULT_FORMS);
    match case {
        CityCase::Prepositional => prepositional,
        CityCase::Dative => dative,
    }
}

/// (prepositional, dative) forms for a known region code.
fn forms(code: &str) -> Option<(&'static str, &'static str)> {
    let forms = match code {
        "default" => DEFAULT_FORMS,
        "simferopol" => ("Симферополе", "Симферополю"),
        "sevastopol" => ("Севастополе", "Севастополю"),
        "yalta" => ("Ялте", "Ялте"),
        "alushta" => ("Алуште", "Алуште"),
        "evpatoria" => ("Евпатории", "Евпатории"),
        "kerch" => ("Керчи", "Керчи"),
        "feodosia" => ("Феодосии", "Феодосии"),
        "sudak" => ("Судаке", "Судаку"),
        "bakhchisaray" => ("Бахчисарае", "Бахчисараю"),
        "dzhankoy" => ("Джанкое", "Джанкою"),
        "saki" => ("Саках", "Сакам"),
        "armyansk" => ("Армянске", "Армянску"),
        "krasnoperekopsk" => ("Красноперекопске", "Красноперекопску"),
        "belogorsk" => ("Белогорске", "Белогорску"),
        "stary-krym" => ("Старом Крыму", "Старому Крыму"),
        "shchelkino" => ("Щёлкино", "Щёлкино"),
        "simeiz" => ("Симеизе", "Симеизу"),
        "alupka" => ("Алупке", "Алупке"),
        "gurzuf" => ("Гурзуфе", "Гурзуфу"),
        "foros" => ("Форосе", "Форосу"),
        "partenit" => ("Партените", "Партениту"),
        "koktebel" => ("Коктебеле", "Коктебелю"),
        "ordzhonikidze" => ("Орджоникидзе", "Орджоникидзе"),
        "primorsky" => ("Приморском", "Приморскому"),
        "nikolaevka" => ("Николаевке", "Николаевке"),
        "chernomorskoe" => ("Черноморском", "Черноморскому"),
        "razdolnoe" => ("Раздольном", "Раздольному"),
        "lenino" => ("Ленино", "Ленино"),
        "kirovskoe" => ("Кировском", "Кировскому"),
        "sovetsky" => ("Советском", "Советскому"),
        "inkerman" => ("Инкермане", "Инкерману"),
        "balaklava" => ("Балаклаве", "Балаклаве"),
        _ => return None,
    };
    Some(forms)
}
