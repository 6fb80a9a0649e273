//! Static lexicon for the default tagger.
//!
//! Covers the words the address grammar reasons about by lemma (street type
//! keywords, house/flat/city markers, region and country names), the
//! qualifiers used in "named after" streets, and the first names and
//! surnames common in the city's street names. Everything else goes through
//! the suffix guesser.

use crate::morph::{Grammeme as G, TagSet};

/// One word form of the lexicon.
#[derive(Clone, Copy, Debug)]
pub struct LexEntry {
    /// Word form, lower case.
    pub form: &'static str,
    /// Lemma of the form.
    pub lemma: &'static str,
    /// Grammemes of this reading.
    pub tags: TagSet,
}

const fn e(form: &'static str, lemma: &'static str, tags: TagSet) -> LexEntry {
    LexEntry { form, lemma, tags }
}

const NOUN_M: TagSet = TagSet::of(&[G::Noun, G::Masculine, G::Singular]);
const NOUN_F: TagSet = TagSet::of(&[G::Noun, G::Feminine, G::Singular]);
const NOUN_N: TagSet = TagSet::of(&[G::Noun, G::Neuter, G::Singular]);
const NOUN_PL: TagSet = TagSet::of(&[G::Noun, G::Plural]);
const GEO_M: TagSet = TagSet::of(&[G::Noun, G::Geographic, G::Masculine, G::Singular]);
const GEO_F: TagSet = TagSet::of(&[G::Noun, G::Geographic, G::Feminine, G::Singular]);
const ADJ_M: TagSet = TagSet::of(&[G::Adjective, G::Masculine, G::Singular]);
const ADJ_F: TagSet = TagSet::of(&[G::Adjective, G::Feminine, G::Singular]);
const ADJ_PL: TagSet = TagSet::of(&[G::Adjective, G::Plural]);
const NAME_M: TagSet = TagSet::of(&[G::Noun, G::FirstName, G::Masculine, G::Singular]);
const NAME_F: TagSet = TagSet::of(&[G::Noun, G::FirstName, G::Feminine, G::Singular]);
const SURN_M: TagSet = TagSet::of(&[G::Noun, G::Surname, G::Masculine, G::Singular]);
const SURN_F: TagSet = TagSet::of(&[G::Noun, G::Surname, G::Feminine, G::Singular]);
const SURN_ADJ: TagSet = TagSet::of(&[G::Adjective, G::Surname, G::Masculine, G::Singular]);
const ABBR: TagSet = TagSet::of(&[G::Abbreviation, G::Other]);
const PREP: TagSet = TagSet::of(&[G::Preposition]);
const CONJ: TagSet = TagSet::of(&[G::Conjunction]);

/// The standard lexicon.
pub const LEXICON: &[LexEntry] = &[
    // Street type keywords
    e("улица", "улица", NOUN_F),
    e("улицы", "улица", NOUN_F),
    e("улице", "улица", NOUN_F),
    e("улицу", "улица", NOUN_F),
    e("улицей", "улица", NOUN_F),
    e("шоссе", "шоссе", NOUN_N),
    e("бульвар", "бульвар", NOUN_M),
    e("бульвара", "бульвар", NOUN_M),
    e("бульваре", "бульвар", NOUN_M),
    e("бульвару", "бульвар", NOUN_M),
    e("линия", "линия", NOUN_F),
    e("линии", "линия", NOUN_F),
    e("линию", "линия", NOUN_F),
    e("линией", "линия", NOUN_F),
    e("переулок", "переулок", NOUN_M),
    e("переулка", "переулок", NOUN_M),
    e("переулке", "переулок", NOUN_M),
    e("переулку", "переулок", NOUN_M),
    e("проспект", "проспект", NOUN_M),
    e("проспекта", "проспект", NOUN_M),
    e("проспекте", "проспект", NOUN_M),
    e("проспекту", "проспект", NOUN_M),
    e("проезд", "проезд", NOUN_M),
    e("проезда", "проезд", NOUN_M),
    e("проезде", "проезд", NOUN_M),
    e("проезду", "проезд", NOUN_M),
    e("площадь", "площадь", NOUN_F),
    e("площади", "площадь", NOUN_F),
    e("площадью", "площадь", NOUN_F),
    e("территория", "территория", NOUN_F),
    e("территории", "территория", NOUN_F),
    e("территорию", "территория", NOUN_F),
    // House, flat and city markers
    e("дом", "дом", NOUN_M),
    e("дома", "дом", NOUN_M),
    e("доме", "дом", NOUN_M),
    e("дому", "дом", NOUN_M),
    e("домом", "дом", NOUN_M),
    e("квартира", "квартира", NOUN_F),
    e("квартиры", "квартира", NOUN_F),
    e("квартире", "квартира", NOUN_F),
    e("квартиру", "квартира", NOUN_F),
    e("квартирой", "квартира", NOUN_F),
    e("корпус", "корпус", NOUN_M),
    e("корпуса", "корпус", NOUN_M),
    e("строение", "строение", NOUN_N),
    e("строения", "строение", NOUN_N),
    e("город", "город", NOUN_M),
    e("города", "город", NOUN_M),
    e("городе", "город", NOUN_M),
    e("городу", "город", NOUN_M),
    e("гор", "гор", ABBR),
    e("обл", "область", ABBR),
    e("область", "область", NOUN_F),
    e("области", "область", NOUN_F),
    e("областью", "область", NOUN_F),
    // Geography
    e("череповец", "череповец", GEO_M),
    e("череповца", "череповец", GEO_M),
    e("череповцу", "череповец", GEO_M),
    e("череповце", "череповец", GEO_M),
    e("череповцом", "череповец", GEO_M),
    e("россия", "россия", GEO_F),
    e("россии", "россия", GEO_F),
    e("россию", "россия", GEO_F),
    e("вологодская", "вологодский", ADJ_F),
    e("вологодской", "вологодский", ADJ_F),
    e("вологодскую", "вологодский", ADJ_F),
    e("вологодский", "вологодский", ADJ_M),
    // "Named after" marker and qualifiers
    e("имени", "имени", NOUN_N),
    e("им", "им", ABBR),
    e("протоиерея", "протоиерей", NOUN_M),
    e("партизана", "партизан", NOUN_M),
    e("космонавта", "космонавт", NOUN_M),
    e("командарма", "командарм", NOUN_M),
    e("генерала", "генерал", NOUN_M),
    e("маршала", "маршал", NOUN_M),
    e("академика", "академик", NOUN_M),
    e("героя", "герой", NOUN_M),
    e("городского", "городской", ADJ_M),
    e("набережная", "набережная", NOUN_F),
    e("набережная", "набережный", ADJ_F),
    e("соловецких", "соловецкий", ADJ_PL),
    e("подстанции", "подстанция", NOUN_F),
    e("юнги", "юнга", NOUN_M),
    e("октября", "октябрь", NOUN_M),
    e("летия", "летие", NOUN_N),
    e("металлургов", "металлург", NOUN_PL),
    e("строителей", "строитель", NOUN_PL),
    e("победы", "победа", NOUN_F),
    e("мира", "мир", NOUN_M),
    // First names
    e("карл", "карл", NAME_M),
    e("карла", "карл", NAME_M),
    e("роза", "роза", NAME_F),
    e("розы", "роза", NAME_F),
    e("максим", "максим", NAME_M),
    e("максима", "максим", NAME_M),
    e("сергей", "сергей", NAME_M),
    e("сергея", "сергей", NAME_M),
    e("юрий", "юрий", NAME_M),
    e("юрия", "юрий", NAME_M),
    e("александр", "александр", NAME_M),
    e("александра", "александр", NAME_M),
    e("михаил", "михаил", NAME_M),
    e("михаила", "михаил", NAME_M),
    e("иван", "иван", NAME_M),
    e("ивана", "иван", NAME_M),
    e("петр", "петр", NAME_M),
    e("петра", "петр", NAME_M),
    e("николай", "николай", NAME_M),
    e("николая", "николай", NAME_M),
    e("владимир", "владимир", NAME_M),
    e("владимира", "владимир", NAME_M),
    e("алексей", "алексей", NAME_M),
    e("алексея", "алексей", NAME_M),
    e("андрей", "андрей", NAME_M),
    e("андрея", "андрей", NAME_M),
    e("дмитрий", "дмитрий", NAME_M),
    e("дмитрия", "дмитрий", NAME_M),
    e("василий", "василий", NAME_M),
    e("василия", "василий", NAME_M),
    e("вера", "вера", NAME_F),
    e("веры", "вера", NAME_F),
    e("ольга", "ольга", NAME_F),
    e("ольги", "ольга", NAME_F),
    e("анна", "анна", NAME_F),
    e("анны", "анна", NAME_F),
    e("мария", "мария", NAME_F),
    e("марии", "мария", NAME_F),
    // Surnames
    e("ленин", "ленин", SURN_M),
    e("ленина", "ленин", SURN_M),
    e("маркс", "маркс", SURN_M),
    e("маркса", "маркс", SURN_M),
    e("люксембург", "люксембург", SURN_F),
    e("гоголь", "гоголь", SURN_M),
    e("гоголя", "гоголь", SURN_M),
    e("горький", "горький", SURN_ADJ),
    e("горького", "горький", SURN_ADJ),
    e("луначарского", "луначарский", SURN_ADJ),
    e("гагарин", "гагарин", SURN_M),
    e("гагарина", "гагарин", SURN_M),
    e("пушкин", "пушкин", SURN_M),
    e("пушкина", "пушкин", SURN_M),
    e("чкалов", "чкалов", SURN_M),
    e("чкалова", "чкалов", SURN_M),
    e("ломоносов", "ломоносов", SURN_M),
    e("ломоносова", "ломоносов", SURN_M),
    e("верещагина", "верещагин", SURN_M),
    e("беляева", "беляев", SURN_M),
    e("милютина", "милютин", SURN_M),
    e("металлургов", "металлургов", SURN_M),
    // Function words
    e("в", "в", PREP),
    e("на", "на", PREP),
    e("по", "по", PREP),
    e("за", "за", PREP),
    e("до", "до", PREP),
    e("от", "от", PREP),
    e("из", "из", PREP),
    e("и", "и", CONJ),
    e("а", "а", CONJ),
];
