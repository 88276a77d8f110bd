//! States of the South South geopolitical zone.

use crate::models::{Lga, State, Ward};

#[rustfmt::skip]
pub const AKWA_IBOM: State = State {
    key: "akwa-ibom",
    name: "Akwa Ibom",
    lgas: &[
        Lga { key: "abak", name: "Abak", wards: &[] },
        Lga { key: "eastern-obolo", name: "Eastern Obolo", wards: &[] },
        Lga { key: "eket", name: "Eket", wards: &[] },
        Lga { key: "esit-eket", name: "Esit Eket", wards: &[] },
        Lga { key: "essien-udim", name: "Essien Udim", wards: &[] },
        Lga { key: "etim-ekpo", name: "Etim Ekpo", wards: &[] },
        Lga { key: "etinan", name: "Etinan", wards: &[] },
        Lga { key: "ibeno", name: "Ibeno", wards: &[] },
        Lga { key: "ibesikpo-asutan", name: "Ibesikpo Asutan", wards: &[] },
        Lga { key: "ibiono-ibom", name: "Ibiono-Ibom", wards: &[] },
        Lga { key: "ika", name: "Ika", wards: &[] },
        Lga { key: "ikono", name: "Ikono", wards: &[] },
        Lga { key: "ikot-abasi", name: "Ikot Abasi", wards: &[] },
        Lga { key: "ikot-ekpene", name: "Ikot Ekpene", wards: &[] },
        Lga { key: "ini", name: "Ini", wards: &[] },
        Lga { key: "itu", name: "Itu", wards: &[] },
        Lga { key: "mbo", name: "Mbo", wards: &[] },
        Lga { key: "mkpat-enin", name: "Mkpat-Enin", wards: &[] },
        Lga { key: "nsit-atai", name: "Nsit-Atai", wards: &[] },
        Lga { key: "nsit-ibom", name: "Nsit-Ibom", wards: &[] },
        Lga { key: "nsit-ubium", name: "Nsit-Ubium", wards: &[] },
        Lga { key: "obot-akara", name: "Obot Akara", wards: &[] },
        Lga { key: "okobo", name: "Okobo", wards: &[] },
        Lga { key: "onna", name: "Onna", wards: &[] },
        Lga { key: "oron", name: "Oron", wards: &[] },
        Lga { key: "oruk-anam", name: "Oruk Anam", wards: &[] },
        Lga { key: "udung-uko", name: "Udung-Uko", wards: &[] },
        Lga { key: "ukanafun", name: "Ukanafun", wards: &[] },
        Lga { key: "uruan", name: "Uruan", wards: &[] },
        Lga { key: "urue-offong-oruko", name: "Urue-Offong/Oruko", wards: &[] },
        Lga { key: "uyo", name: "Uyo", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const BAYELSA: State = State {
    key: "bayelsa",
    name: "Bayelsa",
    lgas: &[
        Lga { key: "brass", name: "Brass", wards: &[] },
        Lga { key: "ekeremor", name: "Ekeremor", wards: &[] },
        Lga { key: "kolokuma-opokuma", name: "Kolokuma/Opokuma", wards: &[] },
        Lga { key: "nembe", name: "Nembe", wards: &[] },
        Lga { key: "ogbia", name: "Ogbia", wards: &[] },
        Lga { key: "sagbama", name: "Sagbama", wards: &[] },
        Lga { key: "southern-ijaw", name: "Southern Ijaw", wards: &[] },
        Lga { key: "yenagoa", name: "Yenagoa", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const CROSS_RIVER: State = State {
    key: "cross-river",
    name: "Cross River",
    lgas: &[
        Lga { key: "abi", name: "Abi", wards: &[] },
        Lga { key: "akamkpa", name: "Akamkpa", wards: &[] },
        Lga { key: "akpabuyo", name: "Akpabuyo", wards: &[] },
        Lga { key: "bakassi", name: "Bakassi", wards: &[] },
        Lga { key: "bekwarra", name: "Bekwarra", wards: &[] },
        Lga { key: "biase", name: "Biase", wards: &[] },
        Lga { key: "boki", name: "Boki", wards: &[] },
        Lga { key: "calabar-municipal", name: "Calabar Municipal", wards: &[] },
        Lga { key: "calabar-south", name: "Calabar South", wards: &[] },
        Lga { key: "etung", name: "Etung", wards: &[] },
        Lga { key: "ikom", name: "Ikom", wards: &[] },
        Lga { key: "obanliku", name: "Obanliku", wards: &[] },
        Lga { key: "obubra", name: "Obubra", wards: &[] },
        Lga { key: "obudu", name: "Obudu", wards: &[] },
        Lga { key: "odukpani", name: "Odukpani", wards: &[] },
        Lga { key: "ogoja", name: "Ogoja", wards: &[] },
        Lga { key: "yakuur", name: "Yakuur", wards: &[] },
        Lga { key: "yala", name: "Yala", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const DELTA: State = State {
    key: "delta",
    name: "Delta",
    lgas: &[
        Lga { key: "aniocha-north", name: "Aniocha North", wards: &[] },
        Lga { key: "aniocha-south", name: "Aniocha South", wards: &[] },
        Lga { key: "bomadi", name: "Bomadi", wards: &[] },
        Lga { key: "burutu", name: "Burutu", wards: &[] },
        Lga { key: "ethiope-east", name: "Ethiope East", wards: &[] },
        Lga { key: "ethiope-west", name: "Ethiope West", wards: &[] },
        Lga { key: "ika-north-east", name: "Ika North East", wards: &[] },
        Lga { key: "ika-south", name: "Ika South", wards: &[] },
        Lga { key: "isoko-north", name: "Isoko North", wards: &[] },
        Lga { key: "isoko-south", name: "Isoko South", wards: &[] },
        Lga { key: "ndokwa-east", name: "Ndokwa East", wards: &[] },
        Lga { key: "ndokwa-west", name: "Ndokwa West", wards: &[] },
        Lga { key: "okpe", name: "Okpe", wards: &[] },
        Lga { key: "oshimili-north", name: "Oshimili North", wards: &[] },
        Lga { key: "oshimili-south", name: "Oshimili South", wards: &[] },
        Lga { key: "patani", name: "Patani", wards: &[] },
        Lga { key: "sapele", name: "Sapele", wards: &[] },
        Lga { key: "udu", name: "Udu", wards: &[] },
        Lga { key: "ughelli-north", name: "Ughelli North", wards: &[] },
        Lga { key: "ughelli-south", name: "Ughelli South", wards: &[] },
        Lga { key: "ukwuani", name: "Ukwuani", wards: &[] },
        Lga { key: "uvwie", name: "Uvwie", wards: &[] },
        Lga { key: "warri-north", name: "Warri North", wards: &[] },
        Lga { key: "warri-south", name: "Warri South", wards: &[] },
        Lga { key: "warri-south-west", name: "Warri South West", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const EDO: State = State {
    key: "edo",
    name: "Edo",
    lgas: &[
        Lga { key: "akoko-edo", name: "Akoko-Edo", wards: &[] },
        Lga { key: "egor", name: "Egor", wards: &[] },
        Lga { key: "esan-central", name: "Esan Central", wards: &[] },
        Lga { key: "esan-north-east", name: "Esan North-East", wards: &[] },
        Lga { key: "esan-south-east", name: "Esan South-East", wards: &[] },
        Lga { key: "esan-west", name: "Esan West", wards: &[] },
        Lga { key: "etsako-central", name: "Etsako Central", wards: &[] },
        Lga { key: "etsako-east", name: "Etsako East", wards: &[] },
        Lga { key: "etsako-west", name: "Etsako West", wards: &[] },
        Lga { key: "igueben", name: "Igueben", wards: &[] },
        Lga { key: "ikpoba-okha", name: "Ikpoba-Okha", wards: &[] },
        Lga { key: "oredo", name: "Oredo", wards: &[] },
        Lga { key: "orhionmwon", name: "Orhionmwon", wards: &[] },
        Lga { key: "ovia-north-east", name: "Ovia North-East", wards: &[] },
        Lga { key: "ovia-south-west", name: "Ovia South-West", wards: &[] },
        Lga { key: "owan-east", name: "Owan East", wards: &[] },
        Lga { key: "owan-west", name: "Owan West", wards: &[] },
        Lga { key: "uhunmwonde", name: "Uhunmwonde", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const RIVERS: State = State {
    key: "rivers",
    name: "Rivers",
    lgas: &[
        Lga { key: "abua-odual", name: "Abua/Odual", wards: &[] },
        Lga { key: "ahoada-east", name: "Ahoada East", wards: &[] },
        Lga { key: "ahoada-west", name: "Ahoada West", wards: &[] },
        Lga { key: "akuku-toru", name: "Akuku-Toru", wards: &[] },
        Lga { key: "andoni", name: "Andoni", wards: &[] },
        Lga { key: "asari-toru", name: "Asari-Toru", wards: &[] },
        Lga { key: "bonny", name: "Bonny", wards: &[] },
        Lga { key: "degema", name: "Degema", wards: &[] },
        Lga { key: "eleme", name: "Eleme", wards: &[] },
        Lga { key: "emuoha", name: "Emuoha", wards: &[] },
        Lga { key: "etche", name: "Etche", wards: &[] },
        Lga { key: "gokana", name: "Gokana", wards: &[] },
        Lga { key: "ikwerre", name: "Ikwerre", wards: &[] },
        Lga { key: "khana", name: "Khana", wards: &[] },
        Lga { key: "obio-akpor", name: "Obio/Akpor", wards: &[] },
        Lga { key: "ogba-egbema-ndoni", name: "Ogba/Egbema/Ndoni", wards: &[] },
        Lga { key: "ogu-bolo", name: "Ogu/Bolo", wards: &[] },
        Lga { key: "okrika", name: "Okrika", wards: &[] },
        Lga { key: "omuma", name: "Omuma", wards: &[] },
        Lga { key: "opobo-nkoro", name: "Opobo/Nkoro", wards: &[] },
        Lga { key: "oyigbo", name: "Oyigbo", wards: &[] },
        Lga {
            key: "port-harcourt",
            name: "Port Harcourt",
            wards: &[
                Ward {
                    key: "old-gra",
                    name: "Old GRA",
                    polling_units: &[
                        "PU 001 - Forces Avenue Open Space",
                        "PU 002 - Hospital Road Junction",
                    ],
                },
                Ward {
                    key: "diobu",
                    name: "Diobu",
                    polling_units: &[
                        "PU 001 - Mile One Market",
                        "PU 002 - Ikwerre Road Primary School",
                    ],
                },
                Ward { key: "borokiri", name: "Borokiri", polling_units: &[] },
                Ward { key: "town", name: "Town", polling_units: &[] },
            ],
        },
        Lga { key: "tai", name: "Tai", wards: &[] },
    ],
};
