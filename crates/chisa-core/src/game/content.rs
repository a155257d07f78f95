//! Fixed content sets for each game kind.

pub struct QuizItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub valid: &'static [&'static str],
}

pub struct RiddleItem {
    pub clue: &'static str,
    pub answer: &'static str,
    pub valid: &'static [&'static str],
}

pub struct CapitalItem {
    pub city: &'static str,
    pub clues: &'static [&'static str],
}

pub struct CountryItem {
    pub country: &'static str,
    pub clues: &'static [&'static str],
}

pub struct FlagItem {
    pub flag: &'static str,
    pub country: &'static str,
}

pub const WORDS: &[&str] = &[
    "meja", "kursi", "lemari", "kasur", "bantal", "lampu", "cermin", "pintu",
    "jendela", "lantai", "buku", "pulpen", "pensil", "kertas", "tas", "sepatu",
    "baju", "celana", "jam", "kunci", "piring", "gelas", "sendok", "garpu",
    "pisau", "kompor", "nasi", "roti", "air", "susu", "matahari", "bulan",
    "bintang", "awan", "hujan", "pohon", "bunga", "tanah", "batu", "rumput",
    "kepala", "tangan", "kaki", "mata", "mulut", "rambut", "ayah", "ibu",
    "anak", "guru", "makan", "minum", "tidur", "bangun", "mandi", "duduk",
    "berdiri", "berjalan", "berlari", "melompat", "melihat", "mendengar",
    "berbicara", "berteriak", "berbisik", "mencium", "merasa", "menyentuh",
    "bertanya", "menjawab", "memasak", "mencuci", "menyapu", "mengepel",
    "menyetrika", "membuka", "menutup", "memotong", "mengaduk", "menuang",
    "membaca", "menulis", "menggambar", "menghitung", "bekerja", "membeli",
    "menjual", "membayar", "mencari", "menemukan", "tertawa", "menangis",
    "tersenyum", "marah", "datang", "pergi", "pulang", "menunggu", "memberi",
    "menerima",
];

pub const CAPITALS: &[CapitalItem] = &[
    CapitalItem { city: "Jakarta", clues: &["Kota mana yang memiliki ikon Monumen Nasional (Monas)?", "Apa nama ibu kota negara Indonesia?"] },
    CapitalItem { city: "Paris", clues: &["Kota yang terkenal dengan Menara Eiffel dan Museum Louvre?", "Apa nama ibu kota Prancis yang dijuluki Kota Cinta?"] },
    CapitalItem { city: "Tokyo", clues: &["Kota mana yang memiliki penyeberangan jalan tersibuk di Shibuya?", "Apa nama ibu kota Jepang?"] },
    CapitalItem { city: "London", clues: &["Kota tempat Menara jam Big Ben dan Istana Buckingham berada?", "Apa nama ibu kota Inggris?"] },
    CapitalItem { city: "Washington D.C.", clues: &["Kota mana yang memiliki Gedung Putih (White House)?", "Apa nama ibu kota Amerika Serikat (bukan New York)?"] },
    CapitalItem { city: "Roma", clues: &["Kota yang memiliki bangunan bersejarah Colosseum?", "Apa nama ibu kota Italia?"] },
    CapitalItem { city: "Kuala Lumpur", clues: &["Kota yang terkenal dengan Menara Kembar Petronas?", "Apa nama ibu kota Malaysia?"] },
    CapitalItem { city: "Beijing", clues: &["Kota yang memiliki Kota Terlarang (Forbidden City)?", "Apa nama ibu kota Tiongkok?"] },
    CapitalItem { city: "Seoul", clues: &["Kota yang dibelah oleh Sungai Han dan terkenal dengan K-Pop?", "Apa nama ibu kota Korea Selatan?"] },
    CapitalItem { city: "Moskow", clues: &["Kota mana yang memiliki Lapangan Merah dan Kremlin?", "Apa nama ibu kota Rusia?"] },
    CapitalItem { city: "Amsterdam", clues: &["Kota yang terkenal dengan banyak kanal air dan sepeda?", "Apa nama ibu kota Belanda?"] },
    CapitalItem { city: "Berlin", clues: &["Kota yang memiliki Gerbang Brandenburg dan sisa-sisa tembok pemisah?", "Apa nama ibu kota Jerman?"] },
    CapitalItem { city: "Bangkok", clues: &["Kota mana yang memiliki kuil Grand Palace dan Wat Arun?", "Apa nama ibu kota Thailand?"] },
    CapitalItem { city: "Kairo", clues: &["Kota yang terletak dekat dengan Piramida Giza?", "Apa nama ibu kota Mesir?"] },
    CapitalItem { city: "Madrid", clues: &["Kota markas klub sepak bola Real Madrid?", "Apa nama ibu kota Spanyol?"] },
    CapitalItem { city: "Brasilia", clues: &["Kota ini menggantikan Rio de Janeiro sebagai pusat pemerintahan?", "Apa nama ibu kota Brasil yang tata kotanya berbentuk pesawat?"] },
    CapitalItem { city: "Ankara", clues: &["Kota yang bukan Istanbul, tapi pusat pemerintahan Turki?", "Apa nama ibu kota Turki?"] },
    CapitalItem { city: "Canberra", clues: &["Kota yang memiliki Gedung Opera (Opera House) yang ikonik?\nTunggu, itu Sydney, tapi apa ibu kota Australia yang sebenarnya?", "Apa nama ibu kota Australia?"] },
    CapitalItem { city: "New Delhi", clues: &["Kota yang memiliki gerbang India Gate?", "Apa nama ibu kota India?"] },
    CapitalItem { city: "Riyadh", clues: &["Kota mana yang memiliki gedung tertinggi Kingdom Centre?", "Apa nama ibu kota Arab Saudi?"] },
];

pub const COUNTRIES: &[CountryItem] = &[
    CountryItem { country: "Amerika Serikat", clues: &["Negara mana yang memiliki landmark Patung Liberty?", "Apa negara yang identik dengan industri film Hollywood?"] },
    CountryItem { country: "Jerman", clues: &["Negara apa yang terkenal dengan Tembok Berlin?", "Negara mana yang menjadi asal mobil BMW dan Mercedes-Benz?"] },
    CountryItem { country: "Brasil", clues: &["Negara yang identik dengan tarian Samba dan karnaval meriah?", "Apa negara yang memiliki hutan hujan Amazon terluas?"] },
    CountryItem { country: "Korea Selatan", clues: &["Negara mana yang merupakan asal dari musik K-Pop?", "Apa negara yang terkenal dengan makanan Kimchi?"] },
    CountryItem { country: "Thailand", clues: &["Apa negara yang memiliki julukan Negeri Gajah Putih?", "Negara yang terkenal dengan kuliner Tom Yum?"] },
    CountryItem { country: "Kanada", clues: &["Negara yang bendera nasionalnya bergambar daun Maple?", "Apa negara yang memiliki bagian dari air terjun Niagara di sisi utara?"] },
    CountryItem { country: "Singapura", clues: &["Negara mana yang memiliki ikon patung singa air (Merlion)?", "Apa negara yang terkenal dengan aturan kebersihan yang sangat ketat?"] },
    CountryItem { country: "Swiss", clues: &["Apa negara yang terkenal sebagai penghasil jam tangan mewah?", "Negara mana yang identik dengan pegunungan Alpen dan cokelat?"] },
    CountryItem { country: "India", clues: &["Negara mana yang memiliki bangunan indah Taj Mahal?", "Apa negara yang terkenal dengan industri film Bollywood?"] },
    CountryItem { country: "Turki", clues: &["Negara yang identik dengan makanan Kebab?", "Apa negara yang memiliki kota Istanbul di dua benua?"] },
    CountryItem { country: "Inggris", clues: &["Apa negara yang memiliki menara jam Big Ben?", "Negara mana yang identik dengan bus tingkat berwarna merah?"] },
    CountryItem { country: "Meksiko", clues: &["Negara yang terkenal dengan topi Sombrero?", "Apa negara yang identik dengan makanan Taco dan Nachos?"] },
    CountryItem { country: "Indonesia", clues: &["Negara mana yang memiliki hewan purba Komodo?", "Apa negara yang terkenal dengan Candi Borobudur?"] },
    CountryItem { country: "Yunani", clues: &["Apa negara yang identik dengan mitologi dewa-dewi seperti Zeus?", "Negara mana yang merupakan tempat lahirnya Olimpiade?"] },
    CountryItem { country: "Italia", clues: &["Negara yang terkenal dengan menara miring Pisa?", "Apa negara yang identik dengan Colosseum dan Gladiator?"] },
    CountryItem { country: "Uni Emirat Arab", clues: &["Negara mana yang memiliki gedung tertinggi di dunia (Burj Khalifa)?", "Apa negara yang memiliki pulau buatan berbentuk pohon palem?"] },
    CountryItem { country: "Rusia", clues: &["Apa negara yang dijuluki Negeri Beruang Merah?", "Negara mana yang merupakan negara terluas di dunia?"] },
    CountryItem { country: "Portugal", clues: &["Negara tempat asal pemain bola Cristiano Ronaldo?", "Apa negara yang terkenal dengan kue tart telur (Egg Tart)?"] },
    CountryItem { country: "Selandia Baru", clues: &["Negara yang terkenal dengan burung Kiwi yang tidak bisa terbang?", "Apa negara yang menjadi lokasi syuting film The Lord of the Rings?"] },
    CountryItem { country: "Peru", clues: &["Apa negara yang memiliki situs kota kuno Machu Picchu di atas gunung?", "Negara yang identik dengan hewan Llama?"] },
];

pub const RIDDLES: &[RiddleItem] = &[
    RiddleItem { clue: "Aku punya wajah tapi tak punya mata, punya jarum tapi tak menjahit. Apakah aku?", answer: "Jam", valid: &["jam"] },
    RiddleItem { clue: "Aku makin basah saat mengeringkan badanmu. Apakah aku?", answer: "Handuk", valid: &["handuk"] },
    RiddleItem { clue: "Aku punya banyak gigi tapi tidak bisa menggigit. Apakah aku?", answer: "Sisir", valid: &["sisir"] },
    RiddleItem { clue: "Aku punya leher tapi tak punya kepala. Apakah aku?", answer: "Botol / Baju", valid: &["botol", "baju"] },
    RiddleItem { clue: "Aku harus dipecahkan dulu baru bisa digunakan. Apakah aku?", answer: "Telur", valid: &["telur"] },
    RiddleItem { clue: "Aku penuh dengan lubang, tapi masih bisa menahan air. Apakah aku?", answer: "Spons", valid: &["spons"] },
    RiddleItem { clue: "Aku punya satu mata tapi tidak bisa melihat. Apakah aku?", answer: "Jarum Jahit", valid: &["jarum jahit", "jarum"] },
    RiddleItem { clue: "Aku naik saat hujan turun. Apakah aku?", answer: "Payung", valid: &["payung"] },
    RiddleItem { clue: "Aku punya kaki empat, tapi tidak bisa berjalan. Apakah aku?", answer: "Meja / Kursi", valid: &["meja", "kursi"] },
    RiddleItem { clue: "Aku punya kota, gunung, dan sungai, tapi tidak ada rumah atau air. Apakah aku?", answer: "Peta", valid: &["peta"] },
    RiddleItem { clue: "Aku tinggi saat masih muda, dan pendek saat sudah tua. Apakah aku?", answer: "Lilin", valid: &["lilin"] },
    RiddleItem { clue: "Aku bisa berkeliling dunia tapi tetap diam di sudut. Apakah aku?", answer: "Perangko", valid: &["perangko"] },
    RiddleItem { clue: "Aku punya banyak kunci tapi tidak bisa membuka satu pintu pun. Apakah aku?", answer: "Piano", valid: &["piano"] },
    RiddleItem { clue: "Semakin banyak kamu mengambilku, semakin besar yang aku tinggalkan. Apakah aku?", answer: "Lubang / Jejak Kaki", valid: &["lubang", "jejak kaki", "jejak"] },
    RiddleItem { clue: "Aku punya tulang belakang (spine), tapi tidak punya tulang lain. Apakah aku?", answer: "Buku", valid: &["buku"] },
    RiddleItem { clue: "Aku punya lidah tapi tidak bisa berbicara atau merasakan rasa. Apakah aku?", answer: "Sepatu", valid: &["sepatu"] },
    RiddleItem { clue: "Aku berjalan naik dan turun tapi tetap di tempat yang sama. Apakah aku?", answer: "Tangga", valid: &["tangga"] },
    RiddleItem { clue: "Aku punya jari tapi tidak punya tulang dan daging. Apakah aku?", answer: "Sarung Tangan", valid: &["sarung tangan"] },
    RiddleItem { clue: "Aku selalu ada di depanmu tapi tidak bisa kau lihat. Apakah aku?", answer: "Masa Depan", valid: &["masa depan"] },
    RiddleItem { clue: "Aku tidur memakai sepatu dan bangun juga memakai sepatu. Apakah aku?", answer: "Kuda", valid: &["kuda", "ban mobil", "ban"] },
    RiddleItem { clue: "Jika kamu menyebut namaku, aku akan pecah/hilang. Apakah aku?", answer: "Kesunyian", valid: &["kesunyian", "sunyi", "hening", "keheningan"] },
    RiddleItem { clue: "Aku bisa terbang tanpa sayap dan menangis tanpa mata. Apakah aku?", answer: "Awan", valid: &["awan"] },
    RiddleItem { clue: "Aku semakin kecil setiap kali aku mandi. Apakah aku?", answer: "Sabun Batang", valid: &["sabun", "sabun batang"] },
    RiddleItem { clue: "Aku punya ranjang (bed) tapi tidak pernah tidur, punya mulut tapi tidak bicara. Apakah aku?", answer: "Sungai", valid: &["sungai"] },
    RiddleItem { clue: "Aku dibeli untuk makan, tapi aku sendiri tidak pernah dimakan. Apakah aku?", answer: "Piring / Sendok", valid: &["piring", "sendok", "garpu"] },
    RiddleItem { clue: "Aku punya kulit tapi bukan hewan, punya mata banyak tapi bukan nanas. Apakah aku?", answer: "Kentang", valid: &["kentang"] },
    RiddleItem { clue: "Aku hanya punya satu warna, tapi punya banyak bentuk dan ukuran, aku selalu menempel padamu saat ada cahaya. Apakah aku?", answer: "Bayangan", valid: &["bayangan"] },
    RiddleItem { clue: "Aku punya cincin (ring) tapi tidak punya jari. Apakah aku?", answer: "Telepon", valid: &["telepon"] },
    RiddleItem { clue: "Orang membuang kulitku dan memakan isiku, tapi jika isiku ditanam aku bisa tumbuh lagi. Apakah aku?", answer: "Jagung", valid: &["jagung", "biji-bijian", "biji bijian"] },
    RiddleItem { clue: "Aku masuk kering dan keluar basah, semakin lama aku di dalam semakin kuat rasanya. Apakah aku?", answer: "Kantong Teh", valid: &["kantong teh", "teh"] },
];

pub const FLAGS: &[FlagItem] = &[
    FlagItem { flag: "🇮🇩", country: "Indonesia" },
    FlagItem { flag: "🇲🇾", country: "Malaysia" },
    FlagItem { flag: "🇯🇵", country: "Jepang" },
    FlagItem { flag: "🇰🇷", country: "Korea Selatan" },
    FlagItem { flag: "🇺🇸", country: "Amerika Serikat" },
    FlagItem { flag: "🇬🇧", country: "Inggris" },
    FlagItem { flag: "🇫🇷", country: "Prancis" },
    FlagItem { flag: "🇩🇪", country: "Jerman" },
    FlagItem { flag: "🇷🇺", country: "Rusia" },
    FlagItem { flag: "🇨🇳", country: "China" },
    FlagItem { flag: "🇦🇺", country: "Australia" },
    FlagItem { flag: "🇹🇭", country: "Thailand" },
    FlagItem { flag: "🇻🇳", country: "Vietnam" },
    FlagItem { flag: "🇸🇬", country: "Singapura" },
    FlagItem { flag: "🇵🇭", country: "Filipina" },
    FlagItem { flag: "🇮🇳", country: "India" },
    FlagItem { flag: "🇧🇷", country: "Brazil" },
    FlagItem { flag: "🇦🇷", country: "Argentina" },
    FlagItem { flag: "🇨🇦", country: "Kanada" },
    FlagItem { flag: "🇮🇹", country: "Italia" },
];

pub const QUIZZES: &[QuizItem] = &[
    QuizItem { question: "Apa nama ibu kota provinsi Jawa Timur?", answer: "Surabaya", valid: &["surabaya"] },
    QuizItem { question: "Mata uang negara Jepang adalah?", answer: "Yen", valid: &["yen"] },
    QuizItem { question: "Binatang yang bisa hidup di air dan di darat disebut?", answer: "Amfibi", valid: &["amfibi"] },
    QuizItem { question: "Siapakah penemu bola lampu pijar?", answer: "Thomas Alva Edison", valid: &["thomas alva edison", "thomas edison", "edison"] },
    QuizItem { question: "Tanggal 10 November diperingati sebagai hari apa?", answer: "Hari Pahlawan", valid: &["hari pahlawan"] },
    QuizItem { question: "Gudeg adalah makanan khas dari daerah mana?", answer: "Yogyakarta", valid: &["yogyakarta", "jogja", "jogjakarta"] },
    QuizItem { question: "Alat untuk mengukur gempa bumi disebut?", answer: "Seismograf", valid: &["seismograf"] },
    QuizItem { question: "Benua terbesar di dunia adalah?", answer: "Asia", valid: &["asia"] },
    QuizItem { question: "Negara manakah yang memiliki julukan 'Negeri Tirai Bambu'?", answer: "China", valid: &["china", "tiongkok", "rrc"] },
    QuizItem { question: "Apa kepanjangan dari singkatan WHO?", answer: "World Health Organization", valid: &["world health organization"] },
    QuizItem { question: "Siapakah presiden pertama Republik Indonesia?", answer: "Ir. Soekarno", valid: &["ir. soekarno", "soekarno", "sukarno"] },
    QuizItem { question: "Naskah teks proklamasi diketik oleh siapa?", answer: "Sayuti Melik", valid: &["sayuti melik"] },
    QuizItem { question: "Kerajaan Hindu tertua di Indonesia adalah?", answer: "Kutai", valid: &["kutai", "kutai kartanegara"] },
    QuizItem { question: "Di manakah Jenderal Sudirman memimpin perang gerilya?", answer: "Yogyakarta", valid: &["yogyakarta", "hutan jawa tengah", "jawa tengah"] },
    QuizItem { question: "Siapakah pahlawan wanita dari Jawa Barat yang terkenal dengan julukan 'Ibu'?", answer: "Dewi Sartika", valid: &["dewi sartika"] },
    QuizItem { question: "Sumpah Pemuda dibacakan pada tanggal?", answer: "28 Oktober 1928", valid: &["28 oktober 1928", "28 oktober"] },
    QuizItem { question: "Apa nama kapal Portugis yang pertama kali mendarat di Malaka pada tahun 1511?", answer: "Alfonso de Albuquerque", valid: &["alfonso de albuquerque", "kapal alfonso de albuquerque"] },
    QuizItem { question: "Candi Borobudur merupakan peninggalan agama?", answer: "Buddha", valid: &["buddha"] },
    QuizItem { question: "Siapakah wakil presiden pertama Indonesia?", answer: "Moh. Hatta", valid: &["moh. hatta", "mohammad hatta", "bung hatta"] },
    QuizItem { question: "Apa nama organisasi pergerakan nasional pertama di Indonesia?", answer: "Budi Utomo", valid: &["budi utomo"] },
    QuizItem { question: "Rumus kimia dari air adalah?", answer: "H2O", valid: &["h2o"] },
    QuizItem { question: "Planet yang paling dekat dengan Matahari adalah?", answer: "Merkurius", valid: &["merkurius"] },
    QuizItem { question: "Hewan yang memakan daging disebut?", answer: "Karnivora", valid: &["karnivora"] },
    QuizItem { question: "Gas yang kita hirup saat bernapas adalah?", answer: "Oksigen", valid: &["oksigen", "o2"] },
    QuizItem { question: "Bagian tumbuhan yang berfungsi menyerap air dari dalam tanah adalah?", answer: "Akar", valid: &["akar"] },
    QuizItem { question: "Planet terbesar dalam tata surya kita adalah?", answer: "Jupiter", valid: &["jupiter"] },
    QuizItem { question: "Perubahan wujud benda dari cair menjadi padat disebut?", answer: "Membeku", valid: &["membeku"] },
    QuizItem { question: "Reptil besar purba yang sudah punah disebut?", answer: "Dinosaurus", valid: &["dinosaurus"] },
    QuizItem { question: "Indra manusia yang digunakan untuk mengecap rasa adalah?", answer: "Lidah", valid: &["lidah"] },
    QuizItem { question: "Sumber energi terbesar bagi bumi adalah?", answer: "Matahari", valid: &["matahari"] },
    QuizItem { question: "Berapakah hasil dari 7 dikali 8?", answer: "56", valid: &["56"] },
    QuizItem { question: "Bangun datar yang memiliki 3 sisi disebut?", answer: "Segitiga", valid: &["segitiga"] },
    QuizItem { question: "Akar pangkat dua dari 100 adalah?", answer: "10", valid: &["10"] },
    QuizItem { question: "Sudut siku-siku besarnya berapa derajat?", answer: "90", valid: &["90 derajat", "90"] },
    QuizItem { question: "1 jam ditambah 30 menit sama dengan berapa menit?", answer: "90", valid: &["90 menit", "90"] },
    QuizItem { question: "Berapakah hasil dari 100 dibagi 4?", answer: "25", valid: &["25"] },
    QuizItem { question: "Bilangan prima terkecil adalah?", answer: "2", valid: &["2"] },
    QuizItem { question: "1 lusin sama dengan berapa buah?", answer: "12", valid: &["12 buah", "12"] },
    QuizItem { question: "Jika sekarang pukul 09.00, 3 jam kemudian pukul berapa?", answer: "12.00", valid: &["12.00", "12", "jam 12"] },
    QuizItem { question: "Bangun ruang yang memiliki alas dan tutup berbentuk lingkaran adalah?", answer: "Tabung", valid: &["tabung"] },
    QuizItem { question: "Lawan kata (antonim) dari 'Panjang' adalah?", answer: "Pendek", valid: &["pendek"] },
    QuizItem { question: "Persamaan kata (sinonim) dari 'Pintar' adalah?", answer: "Pandai", valid: &["pandai", "cerdas"] },
    QuizItem { question: "'Di mana bumi dipijak, di situ langit dijunjung' adalah contoh dari?", answer: "Peribahasa", valid: &["peribahasa"] },
    QuizItem { question: "Cerita rakyat tentang anak durhaka yang menjadi batu berasal dari Sumatera Barat adalah?", answer: "Malin Kundang", valid: &["malin kundang"] },
    QuizItem { question: "Huruf kelima dalam abjad adalah?", answer: "E", valid: &["e"] },
    QuizItem { question: "Tempat untuk meminjam dan membaca buku disebut?", answer: "Perpustakaan", valid: &["perpustakaan"] },
    QuizItem { question: "Penulis novel 'Laskar Pelangi' adalah?", answer: "Andrea Hirata", valid: &["andrea hirata"] },
    QuizItem { question: "Kata 'makan' jika diberi awalan 'di-' menjadi?", answer: "Dimakan", valid: &["dimakan"] },
    QuizItem { question: "Majas yang melebih-lebihkan sesuatu disebut majas?", answer: "Hiperbola", valid: &["hiperbola"] },
    QuizItem { question: "Bahasa Inggris dari 'Meja' adalah?", answer: "Table", valid: &["table"] },
    QuizItem { question: "Apa nama ibu kota provinsi Jawa Barat?", answer: "Bandung", valid: &["bandung"] },
    QuizItem { question: "Samudra terluas di dunia adalah?", answer: "Pasifik", valid: &["samudra pasifik", "pasifik"] },
    QuizItem { question: "Lagu kebangsaan Indonesia adalah?", answer: "Indonesia Raya", valid: &["indonesia raya"] },
    QuizItem { question: "Alat musik yang dimainkan dengan cara dipetik, berasal dari Pulau Rote adalah?", answer: "Sasando", valid: &["sasando"] },
    QuizItem { question: "Pelabuhan utama di Jakarta bernama?", answer: "Tanjung Priok", valid: &["tanjung priok"] },
    QuizItem { question: "Negara tetangga Indonesia yang berbatasan darat dengan Kalimantan adalah?", answer: "Malaysia", valid: &["malaysia"] },
    QuizItem { question: "Gunung tertinggi di Pulau Jawa adalah?", answer: "Semeru", valid: &["gunung semeru", "semeru"] },
    QuizItem { question: "Mata uang negara Amerika Serikat adalah?", answer: "Dolar", valid: &["dolar as", "dollar", "dolar"] },
    QuizItem { question: "Julukan kota 'Serambi Mekkah' diberikan untuk kota?", answer: "Banda Aceh", valid: &["banda aceh", "aceh"] },
    QuizItem { question: "Rumah adat dari Sumatera Barat disebut?", answer: "Rumah Gadang", valid: &["rumah gadang"] },
    QuizItem { question: "Lambang negara Indonesia adalah?", answer: "Garuda", valid: &["garuda pancasila", "garuda"] },
    QuizItem { question: "Berapa tahun Indonesia dijajah oleh Jepang?", answer: "3.5", valid: &["3,5 tahun", "3.5 tahun", "3,5", "3.5", "tiga setengah"] },
    QuizItem { question: "Siapakah pencipta lagu Indonesia Raya?", answer: "W.R. Supratman", valid: &["w.r. supratman", "wr supratman", "supratman"] },
    QuizItem { question: "Tanggal 21 April diperingati sebagai hari?", answer: "Kartini", valid: &["hari kartini", "kartini"] },
    QuizItem { question: "Semboyan negara Indonesia adalah?", answer: "Bhinneka Tunggal Ika", valid: &["bhinneka tunggal ika"] },
    QuizItem { question: "Presiden Indonesia yang ke-3 adalah?", answer: "B.J. Habibie", valid: &["b.j. habibie", "bj habibie", "habibie"] },
    QuizItem { question: "Kerajaan Islam pertama di Indonesia adalah?", answer: "Samudera Pasai", valid: &["samudera pasai"] },
    QuizItem { question: "Peristiwa penculikan Soekarno-Hatta sebelum proklamasi disebut peristiwa?", answer: "Rengasdengklok", valid: &["rengasdengklok"] },
    QuizItem { question: "Warna bendera negara kita adalah?", answer: "Merah Putih", valid: &["merah putih"] },
    QuizItem { question: "UUD 1945 disahkan pada tanggal?", answer: "18 Agustus 1945", valid: &["18 agustus 1945", "18 agustus"] },
    QuizItem { question: "Hewan yang menyusui anaknya disebut?", answer: "Mamalia", valid: &["mamalia"] },
    QuizItem { question: "Bagian mata yang berfungsi mengatur banyaknya cahaya yang masuk adalah?", answer: "Pupil", valid: &["pupil"] },
    QuizItem { question: "Planet yang memiliki cincin tebal dan indah adalah?", answer: "Saturnus", valid: &["saturnus"] },
    QuizItem { question: "Hewan terkecil (mikroorganisme) yang dapat menyebabkan penyakit disebut?", answer: "Bakteri", valid: &["bakteri", "virus"] },
    QuizItem { question: "Proses tumbuhan memasak makanannya sendiri dengan bantuan sinar matahari disebut?", answer: "Fotosintesis", valid: &["fotosintesis"] },
    QuizItem { question: "Jantung manusia berfungsi untuk?", answer: "Memompa Darah", valid: &["memompa darah"] },
    QuizItem { question: "Zat hijau daun disebut?", answer: "Klorofil", valid: &["klorofil"] },
    QuizItem { question: "Alat optik untuk melihat benda-benda yang sangat kecil adalah?", answer: "Mikroskop", valid: &["mikroskop"] },
    QuizItem { question: "Tulang yang melindungi otak adalah?", answer: "Tengkorak", valid: &["tengkorak"] },
    QuizItem { question: "Satuan untuk mengukur tegangan listrik adalah?", answer: "Volt", valid: &["volt"] },
    QuizItem { question: "Sudut yang besarnya kurang dari 90 derajat disebut sudut?", answer: "Lancip", valid: &["lancip", "sudut lancip"] },
    QuizItem { question: "1 kilogram sama dengan berapa gram?", answer: "1000", valid: &["1000 gram", "1000"] },
    QuizItem { question: "Bangun datar yang keempat sisinya sama panjang disebut?", answer: "Persegi", valid: &["persegi"] },
    QuizItem { question: "Angka romawi dari 10 adalah?", answer: "X", valid: &["x"] },
    QuizItem { question: "Hasil dari 9 pangkat 2 adalah?", answer: "81", valid: &["81"] },
    QuizItem { question: "Jika sebuah lingkaran dibagi dua sama besar, maka setiap bagian disebut?", answer: "Setengah Lingkaran", valid: &["setengah lingkaran", "setengah"] },
    QuizItem { question: "Alat untuk mengukur panjang adalah?", answer: "Penggaris", valid: &["penggaris", "meteran"] },
    QuizItem { question: "1 abad sama dengan berapa tahun?", answer: "100", valid: &["100 tahun", "100"] },
    QuizItem { question: "Hasil dari 50 dikurangi 25 adalah?", answer: "25", valid: &["25"] },
    QuizItem { question: "Berapa jumlah sisi pada bangun segiempat?", answer: "4", valid: &["4"] },
    QuizItem { question: "Olahraga yang menggunakan raket dan kok (shuttlecock) adalah?", answer: "Bulu Tangkis", valid: &["bulu tangkis", "badminton"] },
    QuizItem { question: "Jumlah pemain dalam satu tim sepak bola adalah?", answer: "11", valid: &["11 orang", "11"] },
    QuizItem { question: "Tari Kecak berasal dari daerah?", answer: "Bali", valid: &["bali"] },
    QuizItem { question: "Piala dunia sepak bola diadakan setiap berapa tahun sekali?", answer: "4", valid: &["4 tahun", "4 tahun sekali", "4"] },
    QuizItem { question: "Alat musik Angklung terbuat dari?", answer: "Bambu", valid: &["bambu"] },
    QuizItem { question: "Batik diakui oleh UNESCO sebagai warisan budaya dari negara?", answer: "Indonesia", valid: &["indonesia"] },
    QuizItem { question: "Induk organisasi sepak bola seluruh Indonesia adalah?", answer: "PSSI", valid: &["pssi"] },
    QuizItem { question: "Lagu 'Gundul-Gundul Pacul' berasal dari daerah?", answer: "Jawa Tengah", valid: &["jawa tengah"] },
    QuizItem { question: "Seni melipat kertas dari Jepang disebut?", answer: "Origami", valid: &["origami"] },
    QuizItem { question: "Siapakah pembalap F1 pertama dari Indonesia?", answer: "Rio Haryanto", valid: &["rio haryanto"] },
];
