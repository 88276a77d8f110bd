//! States of the North Central geopolitical zone.

use crate::models::{Lga, State, Ward};

#[rustfmt::skip]
pub const BENUE: State = State {
    key: "benue",
    name: "Benue",
    lgas: &[
        Lga { key: "ado", name: "Ado", wards: &[] },
        Lga { key: "agatu", name: "Agatu", wards: &[] },
        Lga { key: "apa", name: "Apa", wards: &[] },
        Lga { key: "buruku", name: "Buruku", wards: &[] },
        Lga { key: "gboko", name: "Gboko", wards: &[] },
        Lga { key: "guma", name: "Guma", wards: &[] },
        Lga { key: "gwer-east", name: "Gwer East", wards: &[] },
        Lga { key: "gwer-west", name: "Gwer West", wards: &[] },
        Lga { key: "katsina-ala", name: "Katsina-Ala", wards: &[] },
        Lga { key: "konshisha", name: "Konshisha", wards: &[] },
        Lga { key: "kwande", name: "Kwande", wards: &[] },
        Lga { key: "logo", name: "Logo", wards: &[] },
        Lga { key: "makurdi", name: "Makurdi", wards: &[] },
        Lga { key: "obi", name: "Obi", wards: &[] },
        Lga { key: "ogbadibo", name: "Ogbadibo", wards: &[] },
        Lga { key: "ohimini", name: "Ohimini", wards: &[] },
        Lga { key: "oju", name: "Oju", wards: &[] },
        Lga { key: "okpokwu", name: "Okpokwu", wards: &[] },
        Lga { key: "otukpo", name: "Otukpo", wards: &[] },
        Lga { key: "tarka", name: "Tarka", wards: &[] },
        Lga { key: "ukum", name: "Ukum", wards: &[] },
        Lga { key: "ushongo", name: "Ushongo", wards: &[] },
        Lga { key: "vandeikya", name: "Vandeikya", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const FCT: State = State {
    key: "fct",
    name: "Federal Capital Territory",
    lgas: &[
        Lga { key: "abaji", name: "Abaji", wards: &[] },
        Lga { key: "bwari", name: "Bwari", wards: &[] },
        Lga { key: "gwagwalada", name: "Gwagwalada", wards: &[] },
        Lga { key: "kuje", name: "Kuje", wards: &[] },
        Lga { key: "kwali", name: "Kwali", wards: &[] },
        Lga {
            key: "municipal-area-council",
            name: "Municipal Area Council",
            wards: &[
                Ward {
                    key: "city-centre",
                    name: "City Centre",
                    polling_units: &[
                        "PU 001 - Federal Secretariat",
                        "PU 002 - Eagle Square",
                    ],
                },
                Ward {
                    key: "garki",
                    name: "Garki",
                    polling_units: &[
                        "PU 001 - Area 1 Shopping Complex",
                        "PU 002 - Area 10 Market",
                        "PU 003 - Garki Model Primary School",
                        "PU 004 - Area 11 Open Space",
                    ],
                },
                Ward {
                    key: "wuse",
                    name: "Wuse",
                    polling_units: &[
                        "PU 001 - Wuse Market Gate",
                        "PU 002 - Zone 4 Junction",
                        "PU 003 - Wuse Zone 6 LEA Primary School",
                    ],
                },
                Ward {
                    key: "gwarinpa",
                    name: "Gwarinpa",
                    polling_units: &[
                        "PU 001 - First Avenue Junction",
                        "PU 002 - Gwarinpa Estate Model School",
                    ],
                },
                Ward { key: "karu", name: "Karu", polling_units: &[] },
                Ward { key: "nyanya", name: "Nyanya", polling_units: &[] },
                Ward { key: "jiwa", name: "Jiwa", polling_units: &[] },
                Ward { key: "orozo", name: "Orozo", polling_units: &[] },
                Ward { key: "kabusa", name: "Kabusa", polling_units: &[] },
                Ward { key: "gui", name: "Gui", polling_units: &[] },
            ],
        },
    ],
};

#[rustfmt::skip]
pub const KOGI: State = State {
    key: "kogi",
    name: "Kogi",
    lgas: &[
        Lga { key: "adavi", name: "Adavi", wards: &[] },
        Lga { key: "ajaokuta", name: "Ajaokuta", wards: &[] },
        Lga { key: "ankpa", name: "Ankpa", wards: &[] },
        Lga { key: "bassa", name: "Bassa", wards: &[] },
        Lga { key: "dekina", name: "Dekina", wards: &[] },
        Lga { key: "ibaji", name: "Ibaji", wards: &[] },
        Lga { key: "idah", name: "Idah", wards: &[] },
        Lga { key: "igalamela-odolu", name: "Igalamela Odolu", wards: &[] },
        Lga { key: "ijumu", name: "Ijumu", wards: &[] },
        Lga { key: "kabba-bunu", name: "Kabba/Bunu", wards: &[] },
        Lga { key: "kogi", name: "Kogi", wards: &[] },
        Lga { key: "lokoja", name: "Lokoja", wards: &[] },
        Lga { key: "mopa-muro", name: "Mopa Muro", wards: &[] },
        Lga { key: "ofu", name: "Ofu", wards: &[] },
        Lga { key: "ogori-magongo", name: "Ogori/Magongo", wards: &[] },
        Lga { key: "okehi", name: "Okehi", wards: &[] },
        Lga { key: "okene", name: "Okene", wards: &[] },
        Lga { key: "olamaboro", name: "Olamaboro", wards: &[] },
        Lga { key: "omala", name: "Omala", wards: &[] },
        Lga { key: "yagba-east", name: "Yagba East", wards: &[] },
        Lga { key: "yagba-west", name: "Yagba West", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const KWARA: State = State {
    key: "kwara",
    name: "Kwara",
    lgas: &[
        Lga { key: "asa", name: "Asa", wards: &[] },
        Lga { key: "baruten", name: "Baruten", wards: &[] },
        Lga { key: "edu", name: "Edu", wards: &[] },
        Lga { key: "ekiti", name: "Ekiti", wards: &[] },
        Lga { key: "ifelodun", name: "Ifelodun", wards: &[] },
        Lga { key: "ilorin-east", name: "Ilorin East", wards: &[] },
        Lga { key: "ilorin-south", name: "Ilorin South", wards: &[] },
        Lga { key: "ilorin-west", name: "Ilorin West", wards: &[] },
        Lga { key: "irepodun", name: "Irepodun", wards: &[] },
        Lga { key: "isin", name: "Isin", wards: &[] },
        Lga { key: "kaiama", name: "Kaiama", wards: &[] },
        Lga { key: "moro", name: "Moro", wards: &[] },
        Lga { key: "offa", name: "Offa", wards: &[] },
        Lga { key: "oke-ero", name: "Oke Ero", wards: &[] },
        Lga { key: "oyun", name: "Oyun", wards: &[] },
        Lga { key: "pategi", name: "Pategi", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const NASARAWA: State = State {
    key: "nasarawa",
    name: "Nasarawa",
    lgas: &[
        Lga { key: "akwanga", name: "Akwanga", wards: &[] },
        Lga { key: "awe", name: "Awe", wards: &[] },
        Lga { key: "doma", name: "Doma", wards: &[] },
        Lga { key: "karu", name: "Karu", wards: &[] },
        Lga { key: "keana", name: "Keana", wards: &[] },
        Lga { key: "keffi", name: "Keffi", wards: &[] },
        Lga { key: "kokona", name: "Kokona", wards: &[] },
        Lga { key: "lafia", name: "Lafia", wards: &[] },
        Lga { key: "nasarawa", name: "Nasarawa", wards: &[] },
        Lga { key: "nasarawa-egon", name: "Nasarawa Egon", wards: &[] },
        Lga { key: "obi", name: "Obi", wards: &[] },
        Lga { key: "toto", name: "Toto", wards: &[] },
        Lga { key: "wamba", name: "Wamba", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const NIGER: State = State {
    key: "niger",
    name: "Niger",
    lgas: &[
        Lga { key: "agaie", name: "Agaie", wards: &[] },
        Lga { key: "agwara", name: "Agwara", wards: &[] },
        Lga { key: "bida", name: "Bida", wards: &[] },
        Lga { key: "borgu", name: "Borgu", wards: &[] },
        Lga { key: "bosso", name: "Bosso", wards: &[] },
        Lga { key: "chanchaga", name: "Chanchaga", wards: &[] },
        Lga { key: "edati", name: "Edati", wards: &[] },
        Lga { key: "gbako", name: "Gbako", wards: &[] },
        Lga { key: "gurara", name: "Gurara", wards: &[] },
        Lga { key: "katcha", name: "Katcha", wards: &[] },
        Lga { key: "kontagora", name: "Kontagora", wards: &[] },
        Lga { key: "lapai", name: "Lapai", wards: &[] },
        Lga { key: "lavun", name: "Lavun", wards: &[] },
        Lga { key: "magama", name: "Magama", wards: &[] },
        Lga { key: "mariga", name: "Mariga", wards: &[] },
        Lga { key: "mashegu", name: "Mashegu", wards: &[] },
        Lga { key: "mokwa", name: "Mokwa", wards: &[] },
        Lga { key: "munya", name: "Munya", wards: &[] },
        Lga { key: "paikoro", name: "Paikoro", wards: &[] },
        Lga { key: "rafi", name: "Rafi", wards: &[] },
        Lga { key: "rijau", name: "Rijau", wards: &[] },
        Lga { key: "shiroro", name: "Shiroro", wards: &[] },
        Lga { key: "suleja", name: "Suleja", wards: &[] },
        Lga { key: "tafa", name: "Tafa", wards: &[] },
        Lga { key: "wushishi", name: "Wushishi", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const PLATEAU: State = State {
    key: "plateau",
    name: "Plateau",
    lgas: &[
        Lga { key: "barkin-ladi", name: "Barkin Ladi", wards: &[] },
        Lga { key: "bassa", name: "Bassa", wards: &[] },
        Lga { key: "bokkos", name: "Bokkos", wards: &[] },
        Lga { key: "jos-east", name: "Jos East", wards: &[] },
        Lga { key: "jos-north", name: "Jos North", wards: &[] },
        Lga { key: "jos-south", name: "Jos South", wards: &[] },
        Lga { key: "kanam", name: "Kanam", wards: &[] },
        Lga { key: "kanke", name: "Kanke", wards: &[] },
        Lga { key: "langtang-north", name: "Langtang North", wards: &[] },
        Lga { key: "langtang-south", name: "Langtang South", wards: &[] },
        Lga { key: "mangu", name: "Mangu", wards: &[] },
        Lga { key: "mikang", name: "Mikang", wards: &[] },
        Lga { key: "pankshin", name: "Pankshin", wards: &[] },
        Lga { key: "quaan-pan", name: "Qua'an Pan", wards: &[] },
        Lga { key: "riyom", name: "Riyom", wards: &[] },
        Lga { key: "shendam", name: "Shendam", wards: &[] },
        Lga { key: "wase", name: "Wase", wards: &[] },
    ],
};
