//! States of the South West geopolitical zone.

use crate::models::{Lga, State, Ward};

#[rustfmt::skip]
pub const EKITI: State = State {
    key: "ekiti",
    name: "Ekiti",
    lgas: &[
        Lga { key: "ado-ekiti", name: "Ado Ekiti", wards: &[] },
        Lga { key: "efon", name: "Efon", wards: &[] },
        Lga { key: "ekiti-east", name: "Ekiti East", wards: &[] },
        Lga { key: "ekiti-south-west", name: "Ekiti South-West", wards: &[] },
        Lga { key: "ekiti-west", name: "Ekiti West", wards: &[] },
        Lga { key: "emure", name: "Emure", wards: &[] },
        Lga { key: "gbonyin", name: "Gbonyin", wards: &[] },
        Lga { key: "ido-osi", name: "Ido Osi", wards: &[] },
        Lga { key: "ijero", name: "Ijero", wards: &[] },
        Lga { key: "ikere", name: "Ikere", wards: &[] },
        Lga { key: "ikole", name: "Ikole", wards: &[] },
        Lga { key: "ilejemeje", name: "Ilejemeje", wards: &[] },
        Lga { key: "irepodun-ifelodun", name: "Irepodun/Ifelodun", wards: &[] },
        Lga { key: "ise-orun", name: "Ise/Orun", wards: &[] },
        Lga { key: "moba", name: "Moba", wards: &[] },
        Lga { key: "oye", name: "Oye", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const LAGOS: State = State {
    key: "lagos",
    name: "Lagos",
    lgas: &[
        Lga { key: "agege", name: "Agege", wards: &[] },
        Lga { key: "ajeromi-ifelodun", name: "Ajeromi-Ifelodun", wards: &[] },
        Lga { key: "alimosho", name: "Alimosho", wards: &[] },
        Lga { key: "amuwo-odofin", name: "Amuwo-Odofin", wards: &[] },
        Lga { key: "apapa", name: "Apapa", wards: &[] },
        Lga { key: "badagry", name: "Badagry", wards: &[] },
        Lga { key: "epe", name: "Epe", wards: &[] },
        Lga {
            key: "eti-osa",
            name: "Eti Osa",
            wards: &[
                Ward {
                    key: "victoria-island",
                    name: "Victoria Island",
                    polling_units: &[
                        "PU 001 - Eko Akete Close",
                        "PU 002 - Adeola Odeku Street",
                    ],
                },
                Ward {
                    key: "ikoyi",
                    name: "Ikoyi",
                    polling_units: &[
                        "PU 001 - Obalende Motor Park",
                        "PU 002 - Awolowo Road Junction",
                    ],
                },
                Ward { key: "lekki", name: "Lekki", polling_units: &[] },
                Ward { key: "ajah", name: "Ajah", polling_units: &[] },
            ],
        },
        Lga { key: "ibeju-lekki", name: "Ibeju-Lekki", wards: &[] },
        Lga { key: "ifako-ijaiye", name: "Ifako-Ijaiye", wards: &[] },
        Lga {
            key: "ikeja",
            name: "Ikeja",
            wards: &[
                Ward {
                    key: "ikeja-central",
                    name: "Ikeja Central",
                    polling_units: &[
                        "PU 001 - Ikeja Central Market",
                        "PU 002 - Obafemi Awolowo Way Junction",
                        "PU 003 - Ikeja Grammar School I",
                        "PU 004 - Ikeja Grammar School II",
                        "PU 005 - Olowu Street Open Space",
                        "PU 006 - Ikeja Local Government Secretariat",
                    ],
                },
                Ward {
                    key: "alausa",
                    name: "Alausa",
                    polling_units: &[
                        "PU 001 - Alausa Secretariat Gate",
                        "PU 002 - Alausa Primary School",
                        "PU 003 - Cadastral Road Junction",
                    ],
                },
                Ward {
                    key: "oregun",
                    name: "Oregun",
                    polling_units: &[
                        "PU 001 - Oregun Primary School",
                        "PU 002 - Kudirat Abiola Way Open Space",
                        "PU 003 - Olusosun Market",
                    ],
                },
                Ward {
                    key: "ojodu",
                    name: "Ojodu",
                    polling_units: &[
                        "PU 001 - Ojodu Grammar School",
                        "PU 002 - Berger Bus Stop",
                        "PU 003 - Isheri Olowora Road",
                    ],
                },
                Ward {
                    key: "onigbongbo",
                    name: "Onigbongbo",
                    polling_units: &[
                        "PU 001 - Onigbongbo Town Hall",
                        "PU 002 - Maryland Estate Gate",
                    ],
                },
                Ward { key: "anifowoshe", name: "Anifowoshe", polling_units: &[] },
                Ward {
                    key: "gra",
                    name: "GRA",
                    polling_units: &[
                        "PU 001 - Isaac John Street Open Space",
                        "PU 002 - GRA Primary School",
                    ],
                },
                Ward { key: "wasimi", name: "Wasimi", polling_units: &[] },
                Ward { key: "adekunle-village", name: "Adekunle Village", polling_units: &[] },
                Ward { key: "airport", name: "Airport", polling_units: &[] },
            ],
        },
        Lga { key: "ikorodu", name: "Ikorodu", wards: &[] },
        Lga { key: "kosofe", name: "Kosofe", wards: &[] },
        Lga { key: "lagos-island", name: "Lagos Island", wards: &[] },
        Lga { key: "lagos-mainland", name: "Lagos Mainland", wards: &[] },
        Lga { key: "mushin", name: "Mushin", wards: &[] },
        Lga { key: "ojo", name: "Ojo", wards: &[] },
        Lga { key: "oshodi-isolo", name: "Oshodi-Isolo", wards: &[] },
        Lga { key: "shomolu", name: "Shomolu", wards: &[] },
        Lga {
            key: "surulere",
            name: "Surulere",
            wards: &[
                Ward {
                    key: "adeniran-ogunsanya",
                    name: "Adeniran Ogunsanya",
                    polling_units: &[
                        "PU 001 - Adeniran Ogunsanya Shopping Mall",
                        "PU 002 - Bode Thomas Street",
                    ],
                },
                Ward {
                    key: "itire",
                    name: "Itire",
                    polling_units: &[
                        "PU 001 - Itire Primary School",
                        "PU 002 - Lawanson Market",
                    ],
                },
                Ward { key: "ojuelegba", name: "Ojuelegba", polling_units: &[] },
                Ward { key: "coker", name: "Coker", polling_units: &[] },
            ],
        },
    ],
};

#[rustfmt::skip]
pub const OGUN: State = State {
    key: "ogun",
    name: "Ogun",
    lgas: &[
        Lga { key: "abeokuta-north", name: "Abeokuta North", wards: &[] },
        Lga { key: "abeokuta-south", name: "Abeokuta South", wards: &[] },
        Lga { key: "ado-odo-ota", name: "Ado-Odo/Ota", wards: &[] },
        Lga { key: "egbado-north", name: "Egbado North", wards: &[] },
        Lga { key: "egbado-south", name: "Egbado South", wards: &[] },
        Lga { key: "ewekoro", name: "Ewekoro", wards: &[] },
        Lga { key: "ifo", name: "Ifo", wards: &[] },
        Lga { key: "ijebu-east", name: "Ijebu East", wards: &[] },
        Lga { key: "ijebu-north", name: "Ijebu North", wards: &[] },
        Lga { key: "ijebu-north-east", name: "Ijebu North East", wards: &[] },
        Lga { key: "ijebu-ode", name: "Ijebu Ode", wards: &[] },
        Lga { key: "ikenne", name: "Ikenne", wards: &[] },
        Lga { key: "imeko-afon", name: "Imeko Afon", wards: &[] },
        Lga { key: "ipokia", name: "Ipokia", wards: &[] },
        Lga { key: "obafemi-owode", name: "Obafemi Owode", wards: &[] },
        Lga { key: "odeda", name: "Odeda", wards: &[] },
        Lga { key: "odogbolu", name: "Odogbolu", wards: &[] },
        Lga { key: "ogun-waterside", name: "Ogun Waterside", wards: &[] },
        Lga { key: "remo-north", name: "Remo North", wards: &[] },
        Lga { key: "shagamu", name: "Shagamu", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const ONDO: State = State {
    key: "ondo",
    name: "Ondo",
    lgas: &[
        Lga { key: "akoko-north-east", name: "Akoko North-East", wards: &[] },
        Lga { key: "akoko-north-west", name: "Akoko North-West", wards: &[] },
        Lga { key: "akoko-south-east", name: "Akoko South-East", wards: &[] },
        Lga { key: "akoko-south-west", name: "Akoko South-West", wards: &[] },
        Lga { key: "akure-north", name: "Akure North", wards: &[] },
        Lga { key: "akure-south", name: "Akure South", wards: &[] },
        Lga { key: "ese-odo", name: "Ese Odo", wards: &[] },
        Lga { key: "idanre", name: "Idanre", wards: &[] },
        Lga { key: "ifedore", name: "Ifedore", wards: &[] },
        Lga { key: "ilaje", name: "Ilaje", wards: &[] },
        Lga { key: "ile-oluji-okeigbo", name: "Ile Oluji/Okeigbo", wards: &[] },
        Lga { key: "irele", name: "Irele", wards: &[] },
        Lga { key: "odigbo", name: "Odigbo", wards: &[] },
        Lga { key: "okitipupa", name: "Okitipupa", wards: &[] },
        Lga { key: "ondo-east", name: "Ondo East", wards: &[] },
        Lga { key: "ondo-west", name: "Ondo West", wards: &[] },
        Lga { key: "ose", name: "Ose", wards: &[] },
        Lga { key: "owo", name: "Owo", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const OSUN: State = State {
    key: "osun",
    name: "Osun",
    lgas: &[
        Lga { key: "aiyedaade", name: "Aiyedaade", wards: &[] },
        Lga { key: "aiyedire", name: "Aiyedire", wards: &[] },
        Lga { key: "atakumosa-east", name: "Atakumosa East", wards: &[] },
        Lga { key: "atakumosa-west", name: "Atakumosa West", wards: &[] },
        Lga { key: "boluwaduro", name: "Boluwaduro", wards: &[] },
        Lga { key: "boripe", name: "Boripe", wards: &[] },
        Lga { key: "ede-north", name: "Ede North", wards: &[] },
        Lga { key: "ede-south", name: "Ede South", wards: &[] },
        Lga { key: "egbedore", name: "Egbedore", wards: &[] },
        Lga { key: "ejigbo", name: "Ejigbo", wards: &[] },
        Lga { key: "ife-central", name: "Ife Central", wards: &[] },
        Lga { key: "ife-east", name: "Ife East", wards: &[] },
        Lga { key: "ife-north", name: "Ife North", wards: &[] },
        Lga { key: "ife-south", name: "Ife South", wards: &[] },
        Lga { key: "ifedayo", name: "Ifedayo", wards: &[] },
        Lga { key: "ifelodun", name: "Ifelodun", wards: &[] },
        Lga { key: "ila", name: "Ila", wards: &[] },
        Lga { key: "ilesa-east", name: "Ilesa East", wards: &[] },
        Lga { key: "ilesa-west", name: "Ilesa West", wards: &[] },
        Lga { key: "irepodun", name: "Irepodun", wards: &[] },
        Lga { key: "irewole", name: "Irewole", wards: &[] },
        Lga { key: "isokan", name: "Isokan", wards: &[] },
        Lga { key: "iwo", name: "Iwo", wards: &[] },
        Lga { key: "obokun", name: "Obokun", wards: &[] },
        Lga { key: "odo-otin", name: "Odo Otin", wards: &[] },
        Lga { key: "ola-oluwa", name: "Ola Oluwa", wards: &[] },
        Lga { key: "olorunda", name: "Olorunda", wards: &[] },
        Lga { key: "oriade", name: "Oriade", wards: &[] },
        Lga { key: "orolu", name: "Orolu", wards: &[] },
        Lga { key: "osogbo", name: "Osogbo", wards: &[] },
    ],
};

#[rustfmt::skip]
pub const OYO: State = State {
    key: "oyo",
    name: "Oyo",
    lgas: &[
        Lga { key: "afijio", name: "Afijio", wards: &[] },
        Lga { key: "akinyele", name: "Akinyele", wards: &[] },
        Lga { key: "atiba", name: "Atiba", wards: &[] },
        Lga { key: "atisbo", name: "Atisbo", wards: &[] },
        Lga { key: "egbeda", name: "Egbeda", wards: &[] },
        Lga {
            key: "ibadan-north",
            name: "Ibadan North",
            wards: &[
                Ward {
                    key: "agbowo",
                    name: "Agbowo",
                    polling_units: &[
                        "PU 001 - Agbowo Shopping Complex",
                        "PU 002 - University of Ibadan Second Gate",
                    ],
                },
                Ward { key: "sango", name: "Sango", polling_units: &[] },
                Ward {
                    key: "bodija",
                    name: "Bodija",
                    polling_units: &[
                        "PU 001 - Bodija Market",
                        "PU 002 - Bodija Estate Primary School",
                    ],
                },
            ],
        },
        Lga { key: "ibadan-north-east", name: "Ibadan North-East", wards: &[] },
        Lga { key: "ibadan-north-west", name: "Ibadan North-West", wards: &[] },
        Lga { key: "ibadan-south-east", name: "Ibadan South-East", wards: &[] },
        Lga { key: "ibadan-south-west", name: "Ibadan South-West", wards: &[] },
        Lga { key: "ibarapa-central", name: "Ibarapa Central", wards: &[] },
        Lga { key: "ibarapa-east", name: "Ibarapa East", wards: &[] },
        Lga { key: "ibarapa-north", name: "Ibarapa North", wards: &[] },
        Lga { key: "ido", name: "Ido", wards: &[] },
        Lga { key: "irepo", name: "Irepo", wards: &[] },
        Lga { key: "iseyin", name: "Iseyin", wards: &[] },
        Lga { key: "itesiwaju", name: "Itesiwaju", wards: &[] },
        Lga { key: "iwajowa", name: "Iwajowa", wards: &[] },
        Lga { key: "kajola", name: "Kajola", wards: &[] },
        Lga { key: "lagelu", name: "Lagelu", wards: &[] },
        Lga { key: "ogbomosho-north", name: "Ogbomosho North", wards: &[] },
        Lga { key: "ogbomosho-south", name: "Ogbomosho South", wards: &[] },
        Lga { key: "ogo-oluwa", name: "Ogo Oluwa", wards: &[] },
        Lga { key: "olorunsogo", name: "Olorunsogo", wards: &[] },
        Lga { key: "oluyole", name: "Oluyole", wards: &[] },
        Lga { key: "ona-ara", name: "Ona Ara", wards: &[] },
        Lga { key: "orelope", name: "Orelope", wards: &[] },
        Lga { key: "ori-ire", name: "Ori Ire", wards: &[] },
        Lga { key: "oyo-east", name: "Oyo East", wards: &[] },
        Lga { key: "oyo-west", name: "Oyo West", wards: &[] },
        Lga { key: "saki-east", name: "Saki East", wards: &[] },
        Lga { key: "saki-west", name: "Saki West", wards: &[] },
        Lga { key: "surulere", name: "Surulere", wards: &[] },
    ],
};
