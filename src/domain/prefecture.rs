use serde::{Deserialize, Serialize};

/// One of Japan's 47 first-level administrative divisions (都道府県).
///
/// Every variant carries a fixed 2-digit code ("01".."47"), a kanji label
/// and a katakana reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prefecture {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kochi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

impl Prefecture {
    /// All 47 prefectures in code order.
    pub const ALL: [Prefecture; 47] = [
        Prefecture::Hokkaido,
        Prefecture::Aomori,
        Prefecture::Iwate,
        Prefecture::Miyagi,
        Prefecture::Akita,
        Prefecture::Yamagata,
        Prefecture::Fukushima,
        Prefecture::Ibaraki,
        Prefecture::Tochigi,
        Prefecture::Gunma,
        Prefecture::Saitama,
        Prefecture::Chiba,
        Prefecture::Tokyo,
        Prefecture::Kanagawa,
        Prefecture::Niigata,
        Prefecture::Toyama,
        Prefecture::Ishikawa,
        Prefecture::Fukui,
        Prefecture::Yamanashi,
        Prefecture::Nagano,
        Prefecture::Gifu,
        Prefecture::Shizuoka,
        Prefecture::Aichi,
        Prefecture::Mie,
        Prefecture::Shiga,
        Prefecture::Kyoto,
        Prefecture::Osaka,
        Prefecture::Hyogo,
        Prefecture::Nara,
        Prefecture::Wakayama,
        Prefecture::Tottori,
        Prefecture::Shimane,
        Prefecture::Okayama,
        Prefecture::Hiroshima,
        Prefecture::Yamaguchi,
        Prefecture::Tokushima,
        Prefecture::Kagawa,
        Prefecture::Ehime,
        Prefecture::Kochi,
        Prefecture::Fukuoka,
        Prefecture::Saga,
        Prefecture::Nagasaki,
        Prefecture::Kumamoto,
        Prefecture::Oita,
        Prefecture::Miyazaki,
        Prefecture::Kagoshima,
        Prefecture::Okinawa,
    ];

    /// The 2-digit prefecture code ("01".."47").
    pub fn code(&self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "01",
            Prefecture::Aomori => "02",
            Prefecture::Iwate => "03",
            Prefecture::Miyagi => "04",
            Prefecture::Akita => "05",
            Prefecture::Yamagata => "06",
            Prefecture::Fukushima => "07",
            Prefecture::Ibaraki => "08",
            Prefecture::Tochigi => "09",
            Prefecture::Gunma => "10",
            Prefecture::Saitama => "11",
            Prefecture::Chiba => "12",
            Prefecture::Tokyo => "13",
            Prefecture::Kanagawa => "14",
            Prefecture::Niigata => "15",
            Prefecture::Toyama => "16",
            Prefecture::Ishikawa => "17",
            Prefecture::Fukui => "18",
            Prefecture::Yamanashi => "19",
            Prefecture::Nagano => "20",
            Prefecture::Gifu => "21",
            Prefecture::Shizuoka => "22",
            Prefecture::Aichi => "23",
            Prefecture::Mie => "24",
            Prefecture::Shiga => "25",
            Prefecture::Kyoto => "26",
            Prefecture::Osaka => "27",
            Prefecture::Hyogo => "28",
            Prefecture::Nara => "29",
            Prefecture::Wakayama => "30",
            Prefecture::Tottori => "31",
            Prefecture::Shimane => "32",
            Prefecture::Okayama => "33",
            Prefecture::Hiroshima => "34",
            Prefecture::Yamaguchi => "35",
            Prefecture::Tokushima => "36",
            Prefecture::Kagawa => "37",
            Prefecture::Ehime => "38",
            Prefecture::Kochi => "39",
            Prefecture::Fukuoka => "40",
            Prefecture::Saga => "41",
            Prefecture::Nagasaki => "42",
            Prefecture::Kumamoto => "43",
            Prefecture::Oita => "44",
            Prefecture::Miyazaki => "45",
            Prefecture::Kagoshima => "46",
            Prefecture::Okinawa => "47",
        }
    }

    /// Kanji label, e.g. "東京都".
    pub fn label(&self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "北海道",
            Prefecture::Aomori => "青森県",
            Prefecture::Iwate => "岩手県",
            Prefecture::Miyagi => "宮城県",
            Prefecture::Akita => "秋田県",
            Prefecture::Yamagata => "山形県",
            Prefecture::Fukushima => "福島県",
            Prefecture::Ibaraki => "茨城県",
            Prefecture::Tochigi => "栃木県",
            Prefecture::Gunma => "群馬県",
            Prefecture::Saitama => "埼玉県",
            Prefecture::Chiba => "千葉県",
            Prefecture::Tokyo => "東京都",
            Prefecture::Kanagawa => "神奈川県",
            Prefecture::Niigata => "新潟県",
            Prefecture::Toyama => "富山県",
            Prefecture::Ishikawa => "石川県",
            Prefecture::Fukui => "福井県",
            Prefecture::Yamanashi => "山梨県",
            Prefecture::Nagano => "長野県",
            Prefecture::Gifu => "岐阜県",
            Prefecture::Shizuoka => "静岡県",
            Prefecture::Aichi => "愛知県",
            Prefecture::Mie => "三重県",
            Prefecture::Shiga => "滋賀県",
            Prefecture::Kyoto => "京都府",
            Prefecture::Osaka => "大阪府",
            Prefecture::Hyogo => "兵庫県",
            Prefecture::Nara => "奈良県",
            Prefecture::Wakayama => "和歌山県",
            Prefecture::Tottori => "鳥取県",
            Prefecture::Shimane => "島根県",
            Prefecture::Okayama => "岡山県",
            Prefecture::Hiroshima => "広島県",
            Prefecture::Yamaguchi => "山口県",
            Prefecture::Tokushima => "徳島県",
            Prefecture::Kagawa => "香川県",
            Prefecture::Ehime => "愛媛県",
            Prefecture::Kochi => "高知県",
            Prefecture::Fukuoka => "福岡県",
            Prefecture::Saga => "佐賀県",
            Prefecture::Nagasaki => "長崎県",
            Prefecture::Kumamoto => "熊本県",
            Prefecture::Oita => "大分県",
            Prefecture::Miyazaki => "宮崎県",
            Prefecture::Kagoshima => "鹿児島県",
            Prefecture::Okinawa => "沖縄県",
        }
    }

    /// Katakana reading, e.g. "トウキョウト".
    pub fn label_kana(&self) -> &'static str {
        match self {
            Prefecture::Hokkaido => "ホッカイドウ",
            Prefecture::Aomori => "アオモリケン",
            Prefecture::Iwate => "イワテケン",
            Prefecture::Miyagi => "ミヤギケン",
            Prefecture::Akita => "アキタケン",
            Prefecture::Yamagata => "ヤマガタケン",
            Prefecture::Fukushima => "フクシマケン",
            Prefecture::Ibaraki => "イバラキケン",
            Prefecture::Tochigi => "トチギケン",
            Prefecture::Gunma => "グンマケン",
            Prefecture::Saitama => "サイタマケン",
            Prefecture::Chiba => "チバケン",
            Prefecture::Tokyo => "トウキョウト",
            Prefecture::Kanagawa => "カナガワケン",
            Prefecture::Niigata => "ニイガタケン",
            Prefecture::Toyama => "トヤマケン",
            Prefecture::Ishikawa => "イシカワケン",
            Prefecture::Fukui => "フクイケン",
            Prefecture::Yamanashi => "ヤマナシケン",
            Prefecture::Nagano => "ナガノケン",
            Prefecture::Gifu => "ギフケン",
            Prefecture::Shizuoka => "シズオカケン",
            Prefecture::Aichi => "アイチケン",
            Prefecture::Mie => "ミエケン",
            Prefecture::Shiga => "シガケン",
            Prefecture::Kyoto => "キョウトフ",
            Prefecture::Osaka => "オオサカフ",
            Prefecture::Hyogo => "ヒョウゴケン",
            Prefecture::Nara => "ナラケン",
            Prefecture::Wakayama => "ワカヤマケン",
            Prefecture::Tottori => "トットリケン",
            Prefecture::Shimane => "シマネケン",
            Prefecture::Okayama => "オカヤマケン",
            Prefecture::Hiroshima => "ヒロシマケン",
            Prefecture::Yamaguchi => "ヤマグチケン",
            Prefecture::Tokushima => "トクシマケン",
            Prefecture::Kagawa => "カガワケン",
            Prefecture::Ehime => "エヒメケン",
            Prefecture::Kochi => "コウチケン",
            Prefecture::Fukuoka => "フクオカケン",
            Prefecture::Saga => "サガケン",
            Prefecture::Nagasaki => "ナガサキケン",
            Prefecture::Kumamoto => "クマモトケン",
            Prefecture::Oita => "オオイタケン",
            Prefecture::Miyazaki => "ミヤザキケン",
            Prefecture::Kagoshima => "カゴシマケン",
            Prefecture::Okinawa => "オキナワケン",
        }
    }

    /// Looks up a prefecture by its 2-digit code.
    pub fn from_code(code: &str) -> Option<Prefecture> {
        Prefecture::ALL.iter().copied().find(|p| p.code() == code)
    }
}
