//! User-facing reply strings (Indonesian), shared across handlers.

pub const MSG_WAIT: &str = "⏳ Sedang memproses...";
pub const MSG_ERROR: &str = "❌ Terjadi kesalahan sistem.";
pub const MSG_ERROR_DOWNLOAD: &str = "❌ Gagal mendownload media. Pastikan link publik dan valid.";
pub const MSG_ERROR_UPLOAD: &str = "❌ Gagal mengirim media.";
pub const MSG_INVALID_URL: &str = "⚠️ Link tidak valid.";
pub const MSG_ONLY_GROUP: &str = "⚠️ Perintah ini hanya bisa digunakan di dalam grup.";
pub const MSG_ONLY_ADMIN: &str = "⚠️ Perintah ini hanya untuk admin grup.";
pub const MSG_HELP_STICKER: &str =
    "⚠️ Kirim atau reply gambar/video/GIF dengan caption .sticker atau .s";
pub const MSG_HELP_TOIMG: &str = "⚠️ Reply sticker dengan caption .toimg";

pub const MSG_MENU: &str = "📋 *Daftar Perintah*\n\
Prefix: . ! /\n\n\
• .sticker (.s)\n\
• .toimg (Sticker->Img)\n\
• .show (.rv, View Once)\n\
• .dl <link>\n\
• .mp3 <link>\n\
• .tagall\n\
• .warn <tag/reply>\n\
• .resetwarn <tag/reply>\n\
• .kick <member>\n\
• .tebakkata / .tebakibukota / .tebaknegara\n\
• .tebakbenda / .tebakbendera / .tebakangka / .kuis\n\
• .nyerah (.skip)\n\
• .leaderboard (.lb)\n\
• .pick opsi1 | opsi2\n\
• .short <url>\n\
• .menu";
