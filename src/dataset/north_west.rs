//! States of the North West geopolitical zone.

use crate::models::{Lga, State, Ward};

#[rustfmt::skip]
pub const JIGAWA: State = State {
    key: "jigawa",
    name: "Jigawa",
    lgas: &[
        Lga { key: "auyo", name: "Auyo", wards: &[] },
        Lga { key: "babura", name: "Babura", wards: &[] },
        Lga { key: "biriniwa", name: "Biriniwa", wards: &[] },
        Lga { key: "birnin-kudu", name: "Birnin Kudu", wards: &[] },
        Lga { key: "buji", name: "Buji", wards: &[] },
        Lga { key: "dutse", name: "Dutse", wards: &[] },
        Lga { key: "gagarawa", name: "Gagarawa", wards: &[] },
        Lga { key: "garki", name: "Garki", wards: &[] },
        Lga { key: "gumel", name: "Gumel", wards: &[] },
        Lga { key: "guri", name: "Guri", wards: &[] },
        Lga { key: "gwaram", name: "Gwaram", wards: &[] },
        Lga { key: "gwiwa", name: "Gwiwa", wards: &[] },
        Lga { key: "hadejia", name: "Hadejia", wards: &[] },
        Lga { key: "jahun", name: "Jahun", wards: &[] },
        Lga { key: "kafin-hausa", name: "Kafin Hausa", wards: &[] },
        Lga { key: "kaugama", name: "Kaugama", wards: &[] },
        Lga { key: "kazaure", name: "Kazaure", wards: &[] },
        Lga { key: "kiri-kasama", name: "Kiri Kasama", wards: &[] },
        Lga { key: "kiyawa", name: "Kiyawa", wards: &[] },
        Lga { key: "maigatari", name: "Maigatari", wards: &[] },
        Lga { key: "malam-madori", name: "Malam Madori", wards: &[] },
        Lga { key: "miga", name: "Miga", wards: &[] },
        Lga { key: "ringim", name: "Ringim", wards: &[] },
        Lga { key: "roni", name: "Roni", wards: &[] },
        Lga { key: "sule-tankarkar", name: "Sule Tankarkar", wards: &[] },
        Lga { key: "taura", name: "Taura", wards: &[] },
        Lga { key: "yankwashi", name: "Yankwashi", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const KADUNA: State = State {
    key: "kaduna",
    name: "Kaduna",
    lgas: &[
        Lga { key: "birnin-gwari", name: "Birnin Gwari", wards: &[] },
        Lga { key: "chikun", name: "Chikun", wards: &[] },
        Lga { key: "giwa", name: "Giwa", wards: &[] },
        Lga { key: "igabi", name: "Igabi", wards: &[] },
        Lga { key: "ikara", name: "Ikara", wards: &[] },
        Lga { key: "jaba", name: "Jaba", wards: &[] },
        Lga { key: "jemaa", name: "Jema'a", wards: &[] },
        Lga { key: "kachia", name: "Kachia", wards: &[] },
        Lga { key: "kaduna-north", name: "Kaduna North", wards: &[] },
        Lga { key: "kaduna-south", name: "Kaduna South", wards: &[] },
        Lga { key: "kagarko", name: "Kagarko", wards: &[] },
        Lga { key: "kajuru", name: "Kajuru", wards: &[] },
        Lga { key: "kaura", name: "Kaura", wards: &[] },
        Lga { key: "kauru", name: "Kauru", wards: &[] },
        Lga { key: "kubau", name: "Kubau", wards: &[] },
        Lga { key: "kudan", name: "Kudan", wards: &[] },
        Lga { key: "lere", name: "Lere", wards: &[] },
        Lga { key: "makarfi", name: "Makarfi", wards: &[] },
        Lga { key: "sabon-gari", name: "Sabon Gari", wards: &[] },
        Lga { key: "sanga", name: "Sanga", wards: &[] },
        Lga { key: "soba", name: "Soba", wards: &[] },
        Lga { key: "zangon-kataf", name: "Zangon Kataf", wards: &[] },
        Lga { key: "zaria", name: "Zaria", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const KANO: State = State {
    key: "kano",
    name: "Kano",
    lgas: &[
        Lga { key: "ajingi", name: "Ajingi", wards: &[] },
        Lga { key: "albasu", name: "Albasu", wards: &[] },
        Lga { key: "bagwai", name: "Bagwai", wards: &[] },
        Lga { key: "bebeji", name: "Bebeji", wards: &[] },
        Lga { key: "bichi", name: "Bichi", wards: &[] },
        Lga { key: "bunkure", name: "Bunkure", wards: &[] },
        Lga { key: "dala", name: "Dala", wards: &[] },
        Lga { key: "dambatta", name: "Dambatta", wards: &[] },
        Lga { key: "dawakin-kudu", name: "Dawakin Kudu", wards: &[] },
        Lga { key: "dawakin-tofa", name: "Dawakin Tofa", wards: &[] },
        Lga { key: "doguwa", name: "Doguwa", wards: &[] },
        Lga { key: "fagge", name: "Fagge", wards: &[] },
        Lga { key: "gabasawa", name: "Gabasawa", wards: &[] },
        Lga { key: "garko", name: "Garko", wards: &[] },
        Lga { key: "garun-mallam", name: "Garun Mallam", wards: &[] },
        Lga { key: "gaya", name: "Gaya", wards: &[] },
        Lga { key: "gezawa", name: "Gezawa", wards: &[] },
        Lga { key: "gwale", name: "Gwale", wards: &[] },
        Lga { key: "gwarzo", name: "Gwarzo", wards: &[] },
        Lga { key: "kabo", name: "Kabo", wards: &[] },
        Lga {
            key: "kano-municipal",
            name: "Kano Municipal",
            wards: &[
                Ward {
                    key: "kankarofi",
                    name: "Kankarofi",
                    polling_units: &[
                        "PU 001 - Kankarofi Primary School",
                        "PU 002 - Kofar Wambai Market",
                    ],
                },
                Ward {
                    key: "sharada",
                    name: "Sharada",
                    polling_units: &[
                        "PU 001 - Sharada Industrial Estate",
                        "PU 002 - Sharada Primary School",
                    ],
                },
                Ward { key: "dan-agundi", name: "Dan Agundi", polling_units: &[] },
                Ward { key: "gandun-albasa", name: "Gandun Albasa", polling_units: &[] },
                Ward { key: "jakara", name: "Jakara", polling_units: &[] },
            ],
        },
        Lga { key: "karaye", name: "Karaye", wards: &[] },
        Lga { key: "kibiya", name: "Kibiya", wards: &[] },
        Lga { key: "kiru", name: "Kiru", wards: &[] },
        Lga { key: "kumbotso", name: "Kumbotso", wards: &[] },
        Lga { key: "kunchi", name: "Kunchi", wards: &[] },
        Lga { key: "kura", name: "Kura", wards: &[] },
        Lga { key: "madobi", name: "Madobi", wards: &[] },
        Lga { key: "makoda", name: "Makoda", wards: &[] },
        Lga { key: "minjibir", name: "Minjibir", wards: &[] },
        Lga { key: "nasarawa", name: "Nasarawa", wards: &[] },
        Lga { key: "rano", name: "Rano", wards: &[] },
        Lga { key: "rimin-gado", name: "Rimin Gado", wards: &[] },
        Lga { key: "rogo", name: "Rogo", wards: &[] },
        Lga { key: "shanono", name: "Shanono", wards: &[] },
        Lga { key: "sumaila", name: "Sumaila", wards: &[] },
        Lga { key: "takai", name: "Takai", wards: &[] },
        Lga { key: "tarauni", name: "Tarauni", wards: &[] },
        Lga { key: "tofa", name: "Tofa", wards: &[] },
        Lga { key: "tsanyawa", name: "Tsanyawa", wards: &[] },
        Lga { key: "tudun-wada", name: "Tudun Wada", wards: &[] },
        Lga { key: "ungogo", name: "Ungogo", wards: &[] },
        Lga { key: "warawa", name: "Warawa", wards: &[] },
        Lga { key: "wudil", name: "Wudil", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const KATSINA: State = State {
    key: "katsina",
    name: "Katsina",
    lgas: &[
        Lga { key: "bakori", name: "Bakori", wards: &[] },
        Lga { key: "batagarawa", name: "Batagarawa", wards: &[] },
        Lga { key: "batsari", name: "Batsari", wards: &[] },
        Lga { key: "baure", name: "Baure", wards: &[] },
        Lga { key: "bindawa", name: "Bindawa", wards: &[] },
        Lga { key: "charanchi", name: "Charanchi", wards: &[] },
        Lga { key: "dandume", name: "Dandume", wards: &[] },
        Lga { key: "danja", name: "Danja", wards: &[] },
        Lga { key: "dan-musa", name: "Dan Musa", wards: &[] },
        Lga { key: "daura", name: "Daura", wards: &[] },
        Lga { key: "dutsi", name: "Dutsi", wards: &[] },
        Lga { key: "dutsin-ma", name: "Dutsin Ma", wards: &[] },
        Lga { key: "faskari", name: "Faskari", wards: &[] },
        Lga { key: "funtua", name: "Funtua", wards: &[] },
        Lga { key: "ingawa", name: "Ingawa", wards: &[] },
        Lga { key: "jibia", name: "Jibia", wards: &[] },
        Lga { key: "kafur", name: "Kafur", wards: &[] },
        Lga { key: "kaita", name: "Kaita", wards: &[] },
        Lga { key: "kankara", name: "Kankara", wards: &[] },
        Lga { key: "kankia", name: "Kankia", wards: &[] },
        Lga { key: "katsina", name: "Katsina", wards: &[] },
        Lga { key: "kurfi", name: "Kurfi", wards: &[] },
        Lga { key: "kusada", name: "Kusada", wards: &[] },
        Lga { key: "maiadua", name: "Mai'Adua", wards: &[] },
        Lga { key: "malumfashi", name: "Malumfashi", wards: &[] },
        Lga { key: "mani", name: "Mani", wards: &[] },
        Lga { key: "mashi", name: "Mashi", wards: &[] },
        Lga { key: "matazu", name: "Matazu", wards: &[] },
        Lga { key: "musawa", name: "Musawa", wards: &[] },
        Lga { key: "rimi", name: "Rimi", wards: &[] },
        Lga { key: "sabuwa", name: "Sabuwa", wards: &[] },
        Lga { key: "safana", name: "Safana", wards: &[] },
        Lga { key: "sandamu", name: "Sandamu", wards: &[] },
        Lga { key: "zango", name: "Zango", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const KEBBI: State = State {
    key: "kebbi",
    name: "Kebbi",
    lgas: &[
        Lga { key: "aleiro", name: "Aleiro", wards: &[] },
        Lga { key: "arewa-dandi", name: "Arewa Dandi", wards: &[] },
        Lga { key: "argungu", name: "Argungu", wards: &[] },
        Lga { key: "augie", name: "Augie", wards: &[] },
        Lga { key: "bagudo", name: "Bagudo", wards: &[] },
        Lga { key: "birnin-kebbi", name: "Birnin Kebbi", wards: &[] },
        Lga { key: "bunza", name: "Bunza", wards: &[] },
        Lga { key: "dandi", name: "Dandi", wards: &[] },
        Lga { key: "fakai", name: "Fakai", wards: &[] },
        Lga { key: "gwandu", name: "Gwandu", wards: &[] },
        Lga { key: "jega", name: "Jega", wards: &[] },
        Lga { key: "kalgo", name: "Kalgo", wards: &[] },
        Lga { key: "koko-besse", name: "Koko/Besse", wards: &[] },
        Lga { key: "maiyama", name: "Maiyama", wards: &[] },
        Lga { key: "ngaski", name: "Ngaski", wards: &[] },
        Lga { key: "sakaba", name: "Sakaba", wards: &[] },
        Lga { key: "shanga", name: "Shanga", wards: &[] },
        Lga { key: "suru", name: "Suru", wards: &[] },
        Lga { key: "wasagu-danko", name: "Wasagu/Danko", wards: &[] },
        Lga { key: "yauri", name: "Yauri", wards: &[] },
        Lga { key: "zuru", name: "Zuru", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const SOKOTO: State = State {
    key: "sokoto",
    name: "Sokoto",
    lgas: &[
        Lga { key: "binji", name: "Binji", wards: &[] },
        Lga { key: "bodinga", name: "Bodinga", wards: &[] },
        Lga { key: "dange-shuni", name: "Dange Shuni", wards: &[] },
        Lga { key: "gada", name: "Gada", wards: &[] },
        Lga { key: "goronyo", name: "Goronyo", wards: &[] },
        Lga { key: "gudu", name: "Gudu", wards: &[] },
        Lga { key: "gwadabawa", name: "Gwadabawa", wards: &[] },
        Lga { key: "illela", name: "Illela", wards: &[] },
        Lga { key: "isa", name: "Isa", wards: &[] },
        Lga { key: "kebbe", name: "Kebbe", wards: &[] },
        Lga { key: "kware", name: "Kware", wards: &[] },
        Lga { key: "rabah", name: "Rabah", wards: &[] },
        Lga { key: "sabon-birni", name: "Sabon Birni", wards: &[] },
        Lga { key: "shagari", name: "Shagari", wards: &[] },
        Lga { key: "silame", name: "Silame", wards: &[] },
        Lga { key: "sokoto-north", name: "Sokoto North", wards: &[] },
        Lga { key: "sokoto-south", name: "Sokoto South", wards: &[] },
        Lga { key: "tambuwal", name: "Tambuwal", wards: &[] },
        Lga { key: "tangaza", name: "Tangaza", wards: &[] },
        Lga { key: "tureta", name: "Tureta", wards: &[] },
        Lga { key: "wamako", name: "Wamako", wards: &[] },
        Lga { key: "wurno", name: "Wurno", wards: &[] },
        Lga { key: "yabo", name: "Yabo", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const ZAMFARA: State = State {
    key: "zamfara",
    name: "Zamfara",
    lgas: &[
        Lga { key: "anka", name: "Anka", wards: &[] },
        Lga { key: "bakura", name: "Bakura", wards: &[] },
        Lga { key: "birnin-magaji-kiyaw", name: "Birnin Magaji/Kiyaw", wards: &[] },
        Lga { key: "bukkuyum", name: "Bukkuyum", wards: &[] },
        Lga { key: "bungudu", name: "Bungudu", wards: &[] },
        Lga { key: "gummi", name: "Gummi", wards: &[] },
        Lga { key: "gusau", name: "Gusau", wards: &[] },
        Lga { key: "kaura-namoda", name: "Kaura Namoda", wards: &[] },
        Lga { key: "maradun", name: "Maradun", wards: &[] },
        Lga { key: "maru", name: "Maru", wards: &[] },
        Lga { key: "shinkafi", name: "Shinkafi", wards: &[] },
        Lga { key: "talata-mafara", name: "Talata Mafara", wards: &[] },
        Lga { key: "tsafe", name: "Tsafe", wards: &[] },
        Lga { key: "zurmi", name: "Zurmi", wards: &[] },
    ],
};
