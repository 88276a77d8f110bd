//! States of the South East geopolitical zone.

use crate::models::{Lga, State, Ward};

#[rustfmt::skip]
pub const ABIA: State = State {
    key: "abia",
    name: "Abia",
    lgas: &[
        Lga { key: "aba-north", name: "Aba North", wards: &[] },
        Lga {
            key: "aba-south",
            name: "Aba South",
            wards: &[
                Ward {
                    key: "umungasi",
                    name: "Umungasi",
                    polling_units: &[
                        "PU 001 - Umungasi Central Market",
                        "PU 002 - Umungasi Primary School",
                        "PU 003 - Okigwe Road Junction",
                    ],
                },
                Ward {
                    key: "eziukwu",
                    name: "Eziukwu",
                    polling_units: &[
                        "PU 001 - Eziukwu Primary School",
                        "PU 002 - Ariaria International Market Gate",
                    ],
                },
                Ward {
                    key: "ekeoha",
                    name: "Ekeoha",
                    polling_units: &[
                        "PU 001 - Ekeoha Shopping Centre",
                        "PU 002 - Asa Road Open Space",
                    ],
                },
                Ward { key: "igwebuike", name: "Igwebuike", polling_units: &[] },
                Ward { key: "ngwa", name: "Ngwa", polling_units: &[] },
                Ward { key: "aba-river", name: "Aba River", polling_units: &[] },
            ],
        },
        Lga { key: "arochukwu", name: "Arochukwu", wards: &[] },
        Lga { key: "bende", name: "Bende", wards: &[] },
        Lga { key: "ikwuano", name: "Ikwuano", wards: &[] },
        Lga { key: "isiala-ngwa-north", name: "Isiala Ngwa North", wards: &[] },
        Lga { key: "isiala-ngwa-south", name: "Isiala Ngwa South", wards: &[] },
        Lga { key: "isuikwuato", name: "Isuikwuato", wards: &[] },
        Lga { key: "obi-ngwa", name: "Obi Ngwa", wards: &[] },
        Lga { key: "ohafia", name: "Ohafia", wards: &[] },
        Lga { key: "osisioma", name: "Osisioma", wards: &[] },
        Lga { key: "ugwunagbo", name: "Ugwunagbo", wards: &[] },
        Lga { key: "ukwa-east", name: "Ukwa East", wards: &[] },
        Lga { key: "ukwa-west", name: "Ukwa West", wards: &[] },
        Lga {
            key: "umuahia-north",
            name: "Umuahia North",
            wards: &[
                Ward {
                    key: "umuahia-urban-i",
                    name: "Umuahia Urban I",
                    polling_units: &[
                        "PU 001 - Umuahia Main Market",
                        "PU 002 - Government College Gate",
                    ],
                },
                Ward { key: "umuahia-urban-ii", name: "Umuahia Urban II", polling_units: &[] },
                Ward { key: "ibeku-east", name: "Ibeku East", polling_units: &[] },
            ],
        },
        Lga { key: "umuahia-south", name: "Umuahia South", wards: &[] },
        Lga { key: "umu-nneochi", name: "Umu Nneochi", wards: &[] },
        // Listed under Abia in the seed data; no wards recorded.
        Lga { key: "etim-ekpo", name: "Etim Ekpo", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const ANAMBRA: State = State {
    key: "anambra",
    name: "Anambra",
    lgas: &[
        Lga { key: "aguata", name: "Aguata", wards: &[] },
        Lga { key: "anambra-east", name: "Anambra East", wards: &[] },
        Lga { key: "anambra-west", name: "Anambra West", wards: &[] },
        Lga { key: "anaocha", name: "Anaocha", wards: &[] },
        Lga { key: "awka-north", name: "Awka North", wards: &[] },
        Lga { key: "awka-south", name: "Awka South", wards: &[] },
        Lga { key: "ayamelum", name: "Ayamelum", wards: &[] },
        Lga { key: "dunukofia", name: "Dunukofia", wards: &[] },
        Lga { key: "ekwusigo", name: "Ekwusigo", wards: &[] },
        Lga { key: "idemili-north", name: "Idemili North", wards: &[] },
        Lga { key: "idemili-south", name: "Idemili South", wards: &[] },
        Lga { key: "ihiala", name: "Ihiala", wards: &[] },
        Lga { key: "njikoka", name: "Njikoka", wards: &[] },
        Lga { key: "nnewi-north", name: "Nnewi North", wards: &[] },
        Lga { key: "nnewi-south", name: "Nnewi South", wards: &[] },
        Lga { key: "ogbaru", name: "Ogbaru", wards: &[] },
        Lga { key: "onitsha-north", name: "Onitsha North", wards: &[] },
        Lga { key: "onitsha-south", name: "Onitsha South", wards: &[] },
        Lga { key: "orumba-north", name: "Orumba North", wards: &[] },
        Lga { key: "orumba-south", name: "Orumba South", wards: &[] },
        Lga { key: "oyi", name: "Oyi", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const EBONYI: State = State {
    key: "ebonyi",
    name: "Ebonyi",
    lgas: &[
        Lga { key: "abakaliki", name: "Abakaliki", wards: &[] },
        Lga { key: "afikpo-north", name: "Afikpo North", wards: &[] },
        Lga { key: "afikpo-south", name: "Afikpo South", wards: &[] },
        Lga { key: "ebonyi", name: "Ebonyi", wards: &[] },
        Lga { key: "ezza-north", name: "Ezza North", wards: &[] },
        Lga { key: "ezza-south", name: "Ezza South", wards: &[] },
        Lga { key: "ikwo", name: "Ikwo", wards: &[] },
        Lga { key: "ishielu", name: "Ishielu", wards: &[] },
        Lga { key: "ivo", name: "Ivo", wards: &[] },
        Lga { key: "izzi", name: "Izzi", wards: &[] },
        Lga { key: "ohaozara", name: "Ohaozara", wards: &[] },
        Lga { key: "ohaukwu", name: "Ohaukwu", wards: &[] },
        Lga { key: "onicha", name: "Onicha", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const ENUGU: State = State {
    key: "enugu",
    name: "Enugu",
    lgas: &[
        Lga { key: "aninri", name: "Aninri", wards: &[] },
        Lga { key: "awgu", name: "Awgu", wards: &[] },
        Lga { key: "enugu-east", name: "Enugu East", wards: &[] },
        Lga {
            key: "enugu-north",
            name: "Enugu North",
            wards: &[
                Ward {
                    key: "asata",
                    name: "Asata",
                    polling_units: &[
                        "PU 001 - Asata Primary School",
                        "PU 002 - Ogbete Main Market",
                    ],
                },
                Ward { key: "gra", name: "GRA", polling_units: &[] },
                Ward { key: "ogui-nike", name: "Ogui Nike", polling_units: &[] },
            ],
        },
        Lga { key: "enugu-south", name: "Enugu South", wards: &[] },
        Lga { key: "ezeagu", name: "Ezeagu", wards: &[] },
        Lga { key: "igbo-etiti", name: "Igbo Etiti", wards: &[] },
        Lga { key: "igbo-eze-north", name: "Igbo Eze North", wards: &[] },
        Lga { key: "igbo-eze-south", name: "Igbo Eze South", wards: &[] },
        Lga { key: "isi-uzo", name: "Isi Uzo", wards: &[] },
        Lga { key: "nkanu-east", name: "Nkanu East", wards: &[] },
        Lga { key: "nkanu-west", name: "Nkanu West", wards: &[] },
        Lga { key: "nsukka", name: "Nsukka", wards: &[] },
        Lga { key: "oji-river", name: "Oji River", wards: &[] },
        Lga { key: "udenu", name: "Udenu", wards: &[] },
        Lga { key: "udi", name: "Udi", wards: &[] },
        Lga { key: "uzo-uwani", name: "Uzo Uwani", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const IMO: State = State {
    key: "imo",
    name: "Imo",
    lgas: &[
        Lga { key: "aboh-mbaise", name: "Aboh Mbaise", wards: &[] },
        Lga { key: "ahiazu-mbaise", name: "Ahiazu Mbaise", wards: &[] },
        Lga { key: "ehime-mbano", name: "Ehime Mbano", wards: &[] },
        Lga { key: "ezinihitte", name: "Ezinihitte", wards: &[] },
        Lga { key: "ideato-north", name: "Ideato North", wards: &[] },
        Lga { key: "ideato-south", name: "Ideato South", wards: &[] },
        Lga { key: "ihitte-uboma", name: "Ihitte/Uboma", wards: &[] },
        Lga { key: "ikeduru", name: "Ikeduru", wards: &[] },
        Lga { key: "isiala-mbano", name: "Isiala Mbano", wards: &[] },
        Lga { key: "isu", name: "Isu", wards: &[] },
        Lga { key: "mbaitoli", name: "Mbaitoli", wards: &[] },
        Lga { key: "ngor-okpala", name: "Ngor Okpala", wards: &[] },
        Lga { key: "njaba", name: "Njaba", wards: &[] },
        Lga { key: "nkwerre", name: "Nkwerre", wards: &[] },
        Lga { key: "nwangele", name: "Nwangele", wards: &[] },
        Lga { key: "obowo", name: "Obowo", wards: &[] },
        Lga { key: "oguta", name: "Oguta", wards: &[] },
        Lga { key: "ohaji-egbema", name: "Ohaji/Egbema", wards: &[] },
        Lga { key: "okigwe", name: "Okigwe", wards: &[] },
        Lga { key: "orlu", name: "Orlu", wards: &[] },
        Lga { key: "orsu", name: "Orsu", wards: &[] },
        Lga { key: "oru-east", name: "Oru East", wards: &[] },
        Lga { key: "oru-west", name: "Oru West", wards: &[] },
        Lga { key: "owerri-municipal", name: "Owerri Municipal", wards: &[] },
        Lga { key: "owerri-north", name: "Owerri North", wards: &[] },
        Lga { key: "owerri-west", name: "Owerri West", wards: &[] },
        Lga { key: "unuimo", name: "Unuimo", wards: &[] },
    ],
};
