//! Fun commands: magic conch, khodam checks, compatibility scores, roasts.
//!
//! Name-based commands hash their input (FNV-1a) so the same name always
//! gets the same verdict; the rest are random per invocation.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ports::GroupDirectory;
use crate::registry::{CommandContext, CommandHandler};
use crate::Result;

const CONCH_ANSWERS: &[&str] = &[
    "🐚 Ya.",
    "🐚 Tidak.",
    "🐚 Mungkin.",
    "🐚 Coba lagi.",
    "🐚 Tentu saja!",
    "🐚 Tidak mungkin.",
    "🐚 Bisa jadi...",
    "🐚 Jelas iya!",
    "🐚 Hmm, tidak yakin.",
    "🐚 Lebih baik tidak usah tahu.",
    "🐚 Pasti!",
    "🐚 Kayaknya sih iya.",
    "🐚 Nggak deh.",
    "🐚 Menurut bintang-bintang... iya!",
    "🐚 Tanya lagi nanti ya.",
];

const KHODAMS: &[&str] = &[
    "Macan Putih", "Ular Cobra Emas", "Kulkas 2 Pintu", "Tutup Botol",
    "Sendal Jepit", "Naga Hitam", "Kipas Angin", "Tikus Got",
    "Harimau Sumatra", "Remote TV", "Garuda Sakti", "Kompor Meleduk",
    "Singa Barong", "Ember Bocor", "Ayam Jago", "Panci Ajaib",
    "Kucing Oren", "Galon Kosong", "Elang Bondol", "Shower Mati",
    "Buaya Putih", "Rice Cooker", "Kuda Terbang", "Obat Nyamuk",
    "Singa Putih", "Setrika Panas", "Rajawali Emas", "Jemuran Basah",
    "Banteng Api", "Sapu Lidi Sakti", "Ikan Cupang", "WiFi Tetangga",
    "Naga Api", "Kresek Hitam", "Phoenix Merah", "Sandal Bolong",
    "Serigala Arktik", "Dispenser Error", "Kumbang Emas", "Helm Ojol",
];

const ROASTS: &[&str] = &[
    "Mukanya kayak Wi-Fi gratisan, semua orang connect tapi nggak ada yang mau bayar.",
    "Kalau kamu jadi makanan, paling jadi nasi putih doang. Plain banget.",
    "Otaknya sih encer, tapi sayangnya bocor.",
    "Kamu tuh kayak tugas kuliah, nggak ada yang mau ngerjain.",
    "Muka 404 Not Found. Sorry, kegantengan tidak ditemukan.",
    "Kamu kayak kode tanpa dokumentasi, nggak ada yang bisa ngerti.",
    "Nilai IP kamu kalah sama harga gorengan.",
    "Kamu tuh kayak file ZIP, harus di-extract dulu baru ada isinya... eh ternyata corrupt.",
    "Kamu kayak browser Internet Explorer, selalu ketinggalan.",
    "Mending jadi NPC aja, soalnya skenario hidup kamu nggak ada plot-nya.",
    "Kamu tuh kayak printer, cuma berfungsi kalau dimarahin dulu.",
    "Kamu kayak charger KW, connect-nya lama, charge-nya nggak nambah.",
    "Kamu tuh kayak alarm pagi, annoying tapi tetep di-snooze.",
    "Kalau hidup kamu jadi film, pasti langsung di-skip penonton.",
    "Kamu kayak PowerPoint, cuma bagus di tampilan tapi isinya kosong.",
    "Kamu tuh kayak bug di production, nggak ada yang mau tanggung jawab.",
    "Kamu kayak capslock, selalu teriak tapi nggak penting.",
    "Muka kamu kayak error 500, internal server teriak minta tolong.",
    "Kamu tuh kayak semicolon di Python, nggak dibutuhin.",
    "Kamu kayak commit tanpa message, ada tapi nggak jelas ngapain.",
];

pub struct FunCommands {
    directory: Arc<dyn GroupDirectory>,
}

impl FunCommands {
    pub fn new(directory: Arc<dyn GroupDirectory>) -> Self {
        Self { directory }
    }

    async fn conch(&self, ctx: &CommandContext) -> Result<()> {
        let question = ctx.command.raw_args.trim();
        if question.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .kerangajaib <pertanyaan>\nContoh: .kerangajaib Apakah aku ganteng?",
                )
                .await;
        }

        let answer = pick_random(CONCH_ANSWERS);
        let reply = format!("🔮 *Kerang Ajaib*\n\n❓ {question}\n\n{answer}");
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn khodam(&self, ctx: &CommandContext) -> Result<()> {
        let name = ctx.command.raw_args.trim();
        if name.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .cekkhodam <nama>\nContoh: .cekkhodam Budi",
                )
                .await;
        }

        let idx = fnv1a32(&name.to_lowercase()) as usize % KHODAMS.len();
        let reply = format!(
            "🔮 *Cek Khodam*\n\n👤 Nama: {name}\n🐉 Khodam: *{}*",
            KHODAMS[idx]
        );
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn matchmake(&self, ctx: &CommandContext) -> Result<()> {
        let args = &ctx.command.args;
        if args.len() < 2 {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .cekjodoh <nama1> <nama2>\nContoh: .cekjodoh Budi Ani",
                )
                .await;
        }

        let name1 = &args[0];
        let name2 = args[1..].join(" ");
        let combined = format!("{}+{}", name1.to_lowercase(), name2.to_lowercase());
        let percentage = fnv1a32(&combined) % 101;

        let comment = match percentage {
            90..=100 => "💕 Wah, kalian jodoh banget! Langsung nikah aja!",
            70..=89 => "😍 Cocok banget nih! Tinggal minta restu ortu~",
            50..=69 => "😊 Lumayan cocok, masih bisa diperjuangkan!",
            30..=49 => "😅 Hmm, perlu usaha lebih nih...",
            10..=29 => "😬 Kayaknya kurang cocok deh...",
            _ => "💔 Maaf, sepertinya bukan jodoh...",
        };

        let reply = format!(
            "💘 *Cek Jodoh*\n\n👤 {name1} ❤️ {name2}\n\n📊 Kecocokan: *{percentage}%*\n\n{comment}"
        );
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn rate(&self, ctx: &CommandContext) -> Result<()> {
        let subject = ctx.command.raw_args.trim();
        if subject.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .rate <sesuatu>\nContoh: .rate skripsi gw",
                )
                .await;
        }

        let score: u32 = rand::thread_rng().gen_range(0..=100);
        let (emoji, comment) = match score {
            90..=100 => ("🌟", "LUAR BIASA! Sempurna!"),
            70..=89 => ("😎", "Mantap, keren banget!"),
            50..=69 => ("😊", "Lumayan sih, nggak buruk~"),
            30..=49 => ("😅", "Yaa... bisa lebih baik lagi..."),
            10..=29 => ("😬", "Aduh, kurang nih..."),
            _ => ("💀", "Parah... nggak ada harapan."),
        };

        let reply = format!(
            "{emoji} *Rate*\n\n📝 {subject}\n\n{} {score}/100\n\n{comment}",
            progress_bar(score)
        );
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn roast(&self, ctx: &CommandContext) -> Result<()> {
        let mut name = ctx.command.raw_args.trim().to_string();
        if name.is_empty() {
            name = ctx.event.sender.0.clone();
        }

        let roast = pick_random(ROASTS);
        let reply = format!("🔥 *Roasting Time!*\n\n👤 {name}\n\n{roast}");
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn how_much(&self, ctx: &CommandContext) -> Result<()> {
        let subject = ctx.command.raw_args.trim();
        if subject.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .seberapa <sifat> <nama>\nContoh: .seberapa ganteng Budi",
                )
                .await;
        }

        let percentage = fnv1a32(&subject.to_lowercase()) % 101;
        let emoji = match percentage {
            80..=100 => "🔥🔥🔥",
            60..=79 => "😎",
            40..=59 => "🤔",
            20..=39 => "😅",
            _ => "💀",
        };

        let reply = format!(
            "📊 *Seberapa {subject}?*\n\n{} {percentage}%\n\n{emoji}",
            progress_bar(percentage)
        );
        ctx.sink.send_text(&ctx.event.chat, &reply).await
    }

    async fn who_is_it(&self, ctx: &CommandContext) -> Result<()> {
        let question = ctx.command.raw_args.trim();
        if question.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .siapadia <pertanyaan>\nContoh: .siapadia yang paling rajin",
                )
                .await;
        }

        if !ctx.event.is_group {
            return ctx
                .sink
                .send_text(&ctx.event.chat, "⚠️ Command ini hanya bisa dipakai di grup.")
                .await;
        }

        let members = match self.directory.members(&ctx.event.chat).await {
            Ok(members) if !members.is_empty() => members,
            Ok(_) => {
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "❌ Tidak ada anggota dalam grup.")
                    .await;
            }
            Err(_) => {
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "❌ Gagal mendapatkan info grup.")
                    .await;
            }
        };

        let idx = rand::thread_rng().gen_range(0..members.len());
        let picked = &members[idx];
        let reply = format!(
            "🎯 *Siapa Dia?*\n\n❓ {question}\n\n👉 Jawabannya adalah: *@{picked}*!"
        );
        ctx.sink
            .send_text_with_mentions(&ctx.event.chat, &reply, &[picked.clone()])
            .await
    }
}

#[async_trait::async_trait]
impl CommandHandler for FunCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        match ctx.command.name.as_str() {
            "kerangajaib" => self.conch(&ctx).await,
            "cekkhodam" => self.khodam(&ctx).await,
            "cekjodoh" => self.matchmake(&ctx).await,
            "rate" => self.rate(&ctx).await,
            "roast" => self.roast(&ctx).await,
            "seberapa" => self.how_much(&ctx).await,
            "siapadia" => self.who_is_it(&ctx).await,
            _ => Ok(()),
        }
    }
}

fn pick_random(options: &[&'static str]) -> &'static str {
    options
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("")
}

/// Ten-segment filled/empty bar for 0..=100 values.
fn progress_bar(percent: u32) -> String {
    let filled = (percent / 10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// 32-bit FNV-1a over the input bytes.
fn fnv1a32(input: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in input.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}
