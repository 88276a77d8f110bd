//! States of the North East geopolitical zone.

use crate::models::{Lga, State};

#[rustfmt::skip]
pub const ADAMAWA: State = State {
    key: "adamawa",
    name: "Adamawa",
    lgas: &[
        Lga { key: "demsa", name: "Demsa", wards: &[] },
        Lga { key: "fufore", name: "Fufore", wards: &[] },
        Lga { key: "ganye", name: "Ganye", wards: &[] },
        Lga { key: "gayuk", name: "Gayuk", wards: &[] },
        Lga { key: "gombi", name: "Gombi", wards: &[] },
        Lga { key: "grie", name: "Grie", wards: &[] },
        Lga { key: "hong", name: "Hong", wards: &[] },
        Lga { key: "jada", name: "Jada", wards: &[] },
        Lga { key: "lamurde", name: "Lamurde", wards: &[] },
        Lga { key: "madagali", name: "Madagali", wards: &[] },
        Lga { key: "maiha", name: "Maiha", wards: &[] },
        Lga { key: "mayo-belwa", name: "Mayo Belwa", wards: &[] },
        Lga { key: "michika", name: "Michika", wards: &[] },
        Lga { key: "mubi-north", name: "Mubi North", wards: &[] },
        Lga { key: "mubi-south", name: "Mubi South", wards: &[] },
        Lga { key: "numan", name: "Numan", wards: &[] },
        Lga { key: "shelleng", name: "Shelleng", wards: &[] },
        Lga { key: "song", name: "Song", wards: &[] },
        Lga { key: "toungo", name: "Toungo", wards: &[] },
        Lga { key: "yola-north", name: "Yola North", wards: &[] },
        Lga { key: "yola-south", name: "Yola South", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const BAUCHI: State = State {
    key: "bauchi",
    name: "Bauchi",
    lgas: &[
        Lga { key: "alkaleri", name: "Alkaleri", wards: &[] },
        Lga { key: "bauchi", name: "Bauchi", wards: &[] },
        Lga { key: "bogoro", name: "Bogoro", wards: &[] },
        Lga { key: "damban", name: "Damban", wards: &[] },
        Lga { key: "darazo", name: "Darazo", wards: &[] },
        Lga { key: "dass", name: "Dass", wards: &[] },
        Lga { key: "gamawa", name: "Gamawa", wards: &[] },
        Lga { key: "ganjuwa", name: "Ganjuwa", wards: &[] },
        Lga { key: "giade", name: "Giade", wards: &[] },
        Lga { key: "itas-gadau", name: "Itas/Gadau", wards: &[] },
        Lga { key: "jamaare", name: "Jama'are", wards: &[] },
        Lga { key: "katagum", name: "Katagum", wards: &[] },
        Lga { key: "kirfi", name: "Kirfi", wards: &[] },
        Lga { key: "misau", name: "Misau", wards: &[] },
        Lga { key: "ningi", name: "Ningi", wards: &[] },
        Lga { key: "shira", name: "Shira", wards: &[] },
        Lga { key: "tafawa-balewa", name: "Tafawa Balewa", wards: &[] },
        Lga { key: "toro", name: "Toro", wards: &[] },
        Lga { key: "warji", name: "Warji", wards: &[] },
        Lga { key: "zaki", name: "Zaki", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const BORNO: State = State {
    key: "borno",
    name: "Borno",
    lgas: &[
        Lga { key: "abadam", name: "Abadam", wards: &[] },
        Lga { key: "askira-uba", name: "Askira/Uba", wards: &[] },
        Lga { key: "bama", name: "Bama", wards: &[] },
        Lga { key: "bayo", name: "Bayo", wards: &[] },
        Lga { key: "biu", name: "Biu", wards: &[] },
        Lga { key: "chibok", name: "Chibok", wards: &[] },
        Lga { key: "damboa", name: "Damboa", wards: &[] },
        Lga { key: "dikwa", name: "Dikwa", wards: &[] },
        Lga { key: "gubio", name: "Gubio", wards: &[] },
        Lga { key: "guzamala", name: "Guzamala", wards: &[] },
        Lga { key: "gwoza", name: "Gwoza", wards: &[] },
        Lga { key: "hawul", name: "Hawul", wards: &[] },
        Lga { key: "jere", name: "Jere", wards: &[] },
        Lga { key: "kaga", name: "Kaga", wards: &[] },
        Lga { key: "kala-balge", name: "Kala/Balge", wards: &[] },
        Lga { key: "konduga", name: "Konduga", wards: &[] },
        Lga { key: "kukawa", name: "Kukawa", wards: &[] },
        Lga { key: "kwaya-kusar", name: "Kwaya Kusar", wards: &[] },
        Lga { key: "mafa", name: "Mafa", wards: &[] },
        Lga { key: "magumeri", name: "Magumeri", wards: &[] },
        Lga { key: "maiduguri", name: "Maiduguri", wards: &[] },
        Lga { key: "marte", name: "Marte", wards: &[] },
        Lga { key: "mobbar", name: "Mobbar", wards: &[] },
        Lga { key: "monguno", name: "Monguno", wards: &[] },
        Lga { key: "ngala", name: "Ngala", wards: &[] },
        Lga { key: "nganzai", name: "Nganzai", wards: &[] },
        Lga { key: "shani", name: "Shani", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const GOMBE: State = State {
    key: "gombe",
    name: "Gombe",
    lgas: &[
        Lga { key: "akko", name: "Akko", wards: &[] },
        Lga { key: "balanga", name: "Balanga", wards: &[] },
        Lga { key: "billiri", name: "Billiri", wards: &[] },
        Lga { key: "dukku", name: "Dukku", wards: &[] },
        Lga { key: "funakaye", name: "Funakaye", wards: &[] },
        Lga { key: "gombe", name: "Gombe", wards: &[] },
        Lga { key: "kaltungo", name: "Kaltungo", wards: &[] },
        Lga { key: "kwami", name: "Kwami", wards: &[] },
        Lga { key: "nafada", name: "Nafada", wards: &[] },
        Lga { key: "shongom", name: "Shongom", wards: &[] },
        Lga { key: "yamaltu-deba", name: "Yamaltu/Deba", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const TARABA: State = State {
    key: "taraba",
    name: "Taraba",
    lgas: &[
        Lga { key: "ardo-kola", name: "Ardo Kola", wards: &[] },
        Lga { key: "bali", name: "Bali", wards: &[] },
        Lga { key: "donga", name: "Donga", wards: &[] },
        Lga { key: "gashaka", name: "Gashaka", wards: &[] },
        Lga { key: "gassol", name: "Gassol", wards: &[] },
        Lga { key: "ibi", name: "Ibi", wards: &[] },
        Lga { key: "jalingo", name: "Jalingo", wards: &[] },
        Lga { key: "karim-lamido", name: "Karim Lamido", wards: &[] },
        Lga { key: "kurmi", name: "Kurmi", wards: &[] },
        Lga { key: "lau", name: "Lau", wards: &[] },
        Lga { key: "sardauna", name: "Sardauna", wards: &[] },
        Lga { key: "takum", name: "Takum", wards: &[] },
        Lga { key: "ussa", name: "Ussa", wards: &[] },
        Lga { key: "wukari", name: "Wukari", wards: &[] },
        Lga { key: "yorro", name: "Yorro", wards: &[] },
        Lga { key: "zing", name: "Zing", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const YOBE: State = State {
    key: "yobe",
    name: "Yobe",
    lgas: &[
        Lga { key: "bade", name: "Bade", wards: &[] },
        Lga { key: "bursari", name: "Bursari", wards: &[] },
        Lga { key: "damaturu", name: "Damaturu", wards: &[] },
        Lga { key: "fika", name: "Fika", wards: &[] },
        Lga { key: "fune", name: "Fune", wards: &[] },
        Lga { key: "geidam", name: "Geidam", wards: &[] },
        Lga { key: "gujba", name: "Gujba", wards: &[] },
        Lga { key: "gulani", name: "Gulani", wards: &[] },
        Lga { key: "jakusko", name: "Jakusko", wards: &[] },
        Lga { key: "karasuwa", name: "Karasuwa", wards: &[] },
        Lga { key: "machina", name: "Machina", wards: &[] },
        Lga { key: "nangere", name: "Nangere", wards: &[] },
        Lga { key: "nguru", name: "Nguru", wards: &[] },
        Lga { key: "potiskum", name: "Potiskum", wards: &[] },
        Lga { key: "tarmuwa", name: "Tarmuwa", wards: &[] },
        Lga { key: "yunusari", name: "Yunusari", wards: &[] },
        Lga { key: "yusufari", name: "Yusufari", wards: &[] },
    ],
};
