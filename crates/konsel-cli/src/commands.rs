use std::collections::BTreeSet;

use eyre::{Result, eyre};
use jiff::tz::TimeZone;
use konsel_audit::AuditEvent;
use konsel_chat::crisis::HELP_LINES;
use konsel_chat::session::ChatSession;
use konsel_core::models::achievements::{self, UserStats};
use konsel_core::models::activity::ActivityLog;
use konsel_core::models::chat_history::{ChatMessage, ChatRole};
use konsel_core::models::content;
use konsel_core::models::counselor::{self, Counselor};
use konsel_core::models::journal::{self, JournalEntry, Mood};
use konsel_core::models::package::PACKAGES;
use konsel_core::models::screening::RiskTier;
use konsel_core::models::user::UserAccount;
use konsel_core::trial::{self, TrialStatus};
use konsel_instruments::response::QuestionnaireResponse;
use konsel_instruments::{Instrument, finalize, get_instrument};
use konsel_storage::repo::Repository;
use konsel_storage::store::KeyValueStore;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use uuid::Uuid;

/// Line-oriented stdin reader.
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `label` and read one line. `None` at end of input.
    async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}");
        std::io::Write::flush(&mut std::io::stdout())?;
        Ok(self.lines.next_line().await?)
    }
}

pub async fn register<S: KeyValueStore>(repo: &Repository<S>, name: &str, email: &str) -> Result<()> {
    if let Some(existing) = repo.current_user().await? {
        return Err(eyre!("already registered as {}", existing.email));
    }

    let user = UserAccount::register(name, email, jiff::Timestamp::now())?;
    repo.set_current_user(&user).await?;
    AuditEvent::new("user_registered", "user", user.id.to_string()).emit();

    println!("Selamat datang, {}!", user.name);
    print_trial(trial::evaluate_trial(user.registered_at, jiff::Timestamp::now()));
    Ok(())
}

pub async fn trial_status<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let status = current_trial(repo).await?;
    print_trial(status);
    Ok(())
}

pub fn counselors() {
    for c in counselor::roster() {
        let status = if c.is_online() { "online" } else { "offline" };
        println!("[{}] {} - {} ({status})", c.id, c.name, c.specialization);
    }
}

pub async fn srq<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let instrument = get_instrument("srq29")?;
    let mut response = instrument.new_response();
    let mut prompt = Prompt::new();

    println!(
        "{}: jawab setiap pertanyaan berdasarkan kondisi Anda dalam 30 hari terakhir (y/t).",
        instrument.name()
    );
    for page in 0..response.page_count() {
        println!("\nHalaman {} dari {}", page + 1, response.page_count());
        for index in response.page_items(page) {
            let text = &instrument.items()[index].text;
            let Some(yes) = ask_yes_no(&mut prompt, &format!("{}. {text} ", index + 1)).await? else {
                println!("\nTes dibatalkan ({:.0}% terjawab).", response.progress());
                return Ok(());
            };
            response.answer(index, yes)?;
        }
        tracing::debug!(page, progress = response.progress(), "page complete");
    }

    report_result(repo, instrument.as_ref(), &response).await
}

async fn report_result<S: KeyValueStore>(
    repo: &Repository<S>,
    instrument: &dyn Instrument,
    response: &QuestionnaireResponse,
) -> Result<()> {
    let record = finalize(instrument, response, jiff::Timestamp::now())?;
    repo.append_screening_result(&record).await?;
    AuditEvent::new("screening_completed", "screening", record.id.to_string())
        .with_details(serde_json::json!({ "score": record.score, "tier": record.tier }))
        .emit();

    let interpretation = instrument.interpret(record.score);
    println!(
        "\nSkor Anda: {} dari {}",
        record.score, record.total_questions
    );
    println!("Tingkat Risiko: {}", interpretation.level);
    println!("{}", interpretation.message);
    println!(
        "Catatan: hasil ini bersifat skrining awal dan tidak menggantikan diagnosis profesional."
    );
    if record.tier == RiskTier::High {
        print_help_lines();
    }
    Ok(())
}

pub async fn results<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let results = repo.screening_results().await?;
    if results.is_empty() {
        println!("Belum ada hasil tes.");
        return Ok(());
    }
    for r in results {
        let level = get_instrument(&r.instrument_id)
            .map(|i| i.interpret(r.score).level)
            .unwrap_or_else(|_| format!("{:?}", r.tier));
        println!(
            "{}  {}  {}/{}  {level}",
            r.completed_at, r.instrument_id, r.score, r.total_questions
        );
    }
    Ok(())
}

/// Start a conversation. Without `counselor_id` the last selected
/// counselor is used, if any.
pub async fn chat<S: KeyValueStore>(repo: &Repository<S>, counselor_id: Option<&str>) -> Result<()> {
    let now = jiff::Timestamp::now();
    let mut session = ChatSession::new(now);
    println!("{}", session.history().messages[0].text);

    let chosen = match counselor_id {
        Some(id) => Some(counselor::find(id).ok_or_else(|| eyre!("unknown counselor: {id}"))?),
        // Availability comes from the roster, not the stored copy.
        None => repo
            .selected_counselor()
            .await?
            .and_then(|c| counselor::find(&c.id)),
    };
    if let Some(chosen) = chosen {
        let status = current_trial(repo).await?;
        match session.start_counseling(chosen.clone(), status, now) {
            Ok(welcome) => println!("{}", welcome.text),
            Err(e) => {
                println!("{e}.");
                print_packages_hint();
                return Ok(());
            }
        }
        repo.set_selected_counselor(&chosen).await?;
        repo.save_chat_history(session.history()).await?;
    }

    converse(repo, session).await
}

/// Continue a saved conversation.
pub async fn resume_chat<S: KeyValueStore>(repo: &Repository<S>, id: &str) -> Result<()> {
    let id: Uuid = id.parse().map_err(|_| eyre!("invalid conversation ID: {id}"))?;
    let history = repo
        .chat_history(id)
        .await?
        .ok_or_else(|| eyre!("no conversation with ID {id}"))?;

    let counselor = match history.counselor_id.as_deref() {
        Some(cid) => Some(counselor::find(cid).ok_or_else(|| eyre!("unknown counselor: {cid}"))?),
        None => None,
    };

    for m in &history.messages {
        println!("{}", format_message(m, counselor.as_ref()));
    }
    let status = current_trial(repo).await?;
    let session = match ChatSession::resume(history, counselor, status) {
        Ok(session) => session,
        Err(e) => {
            println!("{e}.");
            print_packages_hint();
            return Ok(());
        }
    };
    converse(repo, session).await
}

/// Saved conversations, most recent first.
pub async fn chats<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let histories = repo.chat_histories().await?;
    if histories.is_empty() {
        println!("Belum ada percakapan.");
        return Ok(());
    }
    for h in histories {
        let with = h
            .counselor_id
            .as_deref()
            .and_then(counselor::find)
            .map(|c| c.name)
            .unwrap_or_else(|| "KonselAI".to_string());
        let preview = h
            .messages
            .last()
            .map(|m| m.text.chars().take(40).collect::<String>())
            .unwrap_or_default();
        println!("{}  {}  {with}  {preview}", h.id, h.updated_at);
    }
    Ok(())
}

fn format_message(message: &ChatMessage, counselor: Option<&Counselor>) -> String {
    match message.role {
        ChatRole::User => format!("> {}", message.text),
        ChatRole::Counselor => match counselor {
            Some(c) => format!("[{}] {}", c.name, message.text),
            None => message.text.clone(),
        },
    }
}

async fn converse<S: KeyValueStore>(repo: &Repository<S>, mut session: ChatSession) -> Result<()> {
    let mut prompt = Prompt::new();
    while let Some(line) = prompt.ask("> ").await? {
        if line.trim() == "/keluar" {
            break;
        }
        let Some(reply) = session.send(&line, jiff::Timestamp::now()) else {
            continue;
        };
        println!("{}", reply.message.text);
        if reply.crisis {
            println!("\nKami peduli denganmu. Kamu tidak sendirian, dan ada bantuan yang tersedia.");
            print_help_lines();
            session.dismiss_crisis_alert();
        }
        repo.save_chat_history(session.history()).await?;
        record_activity(repo, |_| {}).await?;
    }
    if session.history().messages.len() > 1 {
        println!("Percakapan tersimpan: {}", session.history().id);
    }
    Ok(())
}

pub async fn journal_add<S: KeyValueStore>(repo: &Repository<S>, mood: u8, note: &str) -> Result<()> {
    let entry = JournalEntry::new(Mood::new(mood)?, note, jiff::Timestamp::now())?;
    repo.add_journal_entry(&entry).await?;
    record_activity(repo, |_| {}).await?;
    println!("Tersimpan: {} {}", entry.mood.emoji(), entry.mood.label());
    Ok(())
}

pub async fn journal_list<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let entries = repo.journal_entries().await?;
    match journal::average_mood(&entries) {
        Some(avg) => println!("Rata-rata mood: {avg:.1} ({} catatan)", entries.len()),
        None => {
            println!("Belum ada catatan.");
            return Ok(());
        }
    }
    for e in &entries {
        println!("{}  {}  {}", e.created_at, e.mood.emoji(), e.note);
    }
    Ok(())
}

pub fn packages() {
    for p in &PACKAGES {
        let badge = if p.popular { "  ★ Paling populer" } else { "" };
        println!(
            "\n[{}] {} - {} / {} hari, {} sesi{badge}",
            p.id,
            p.name,
            p.price_label(),
            p.duration_days,
            p.sessions
        );
        for feature in p.features {
            println!("  • {feature}");
        }
    }
}

pub fn articles(category: &str) -> Result<()> {
    if !content::ARTICLE_CATEGORIES.contains(&category) {
        return Err(eyre!(
            "unknown category: {category} (choose from {})",
            content::ARTICLE_CATEGORIES.join(", ")
        ));
    }
    for a in content::articles_in(category) {
        println!(
            "[{}] {} ({}, {} menit, {}, ★{:.1})",
            a.id,
            a.title,
            a.category,
            a.minutes,
            a.difficulty.label(),
            a.rating
        );
        println!("    {}", a.description);
    }
    Ok(())
}

pub async fn read_article<S: KeyValueStore>(repo: &Repository<S>, id: u32) -> Result<()> {
    let article = content::article(id).ok_or_else(|| eyre!("no article with ID {id}"))?;
    println!("{}\n\n{}", article.title, article.content);
    record_activity(repo, |log| {
        log.articles_read.insert(article.id);
    })
    .await?;
    Ok(())
}

pub fn tracks(category: &str) -> Result<()> {
    if !content::TRACK_CATEGORIES.contains(&category) {
        return Err(eyre!(
            "unknown category: {category} (choose from {})",
            content::TRACK_CATEGORIES.join(", ")
        ));
    }
    for t in content::tracks_in(category) {
        println!("[{}] {} ({}, {})", t.id, t.title, t.category, t.duration_label());
        println!("    {}", t.description);
    }
    Ok(())
}

/// Log a finished relaxation session.
pub async fn relax_done<S: KeyValueStore>(repo: &Repository<S>, id: u32) -> Result<()> {
    let track = content::track(id).ok_or_else(|| eyre!("no track with ID {id}"))?;
    let log = record_activity(repo, |log| log.relaxation_sessions += 1).await?;
    println!(
        "Sesi relaksasi \"{}\" tercatat ({} sesi total).",
        track.title, log.relaxation_sessions
    );
    Ok(())
}

pub async fn show_achievements<S: KeyValueStore>(repo: &Repository<S>) -> Result<()> {
    let stats = user_stats(repo).await?;
    let progress = achievements::progress(&stats);

    println!(
        "Level {}  •  {} poin  •  {}",
        progress.level,
        progress.total_points,
        if progress.points_to_next_level == 0 {
            "level maksimal".to_string()
        } else {
            format!("{} poin lagi ke level berikutnya", progress.points_to_next_level)
        }
    );
    println!("Streak: {} hari", stats.days_streak);
    for a in &progress.unlocked {
        println!("  {} {} (+{})  {}", a.icon, a.title, a.points, a.description);
    }
    for a in &progress.locked {
        println!("  🔒 {} ({})  {}", a.title, a.points, a.description);
    }
    Ok(())
}

async fn user_stats<S: KeyValueStore>(repo: &Repository<S>) -> Result<UserStats> {
    let log = repo.activity_log().await?;
    let journal = repo.journal_entries().await?;
    let chats = repo.chat_histories().await?;
    let tz = TimeZone::system();

    let mut active_days: BTreeSet<jiff::civil::Date> = log.active_days.clone();
    active_days.extend(journal.iter().map(|e| e.created_at.to_zoned(tz.clone()).date()));
    let today = jiff::Timestamp::now().to_zoned(tz).date();

    Ok(UserStats {
        chat_sessions: count(chats.iter().filter(|h| h.counselor_id.is_some()).count()),
        articles_read: count(log.articles_read.len()),
        journal_entries: count(journal.len()),
        days_streak: achievements::day_streak(&active_days, today),
        relaxation_sessions: log.relaxation_sessions,
    })
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Apply `f` to the activity log and mark today as active.
async fn record_activity<S, F>(repo: &Repository<S>, f: F) -> Result<ActivityLog>
where
    S: KeyValueStore,
    F: FnOnce(&mut ActivityLog) + Send,
{
    let today = jiff::Timestamp::now().to_zoned(TimeZone::system()).date();
    let log = repo
        .update_activity(|log| {
            log.active_days.insert(today);
            f(log);
        })
        .await?;
    Ok(log)
}

async fn current_trial<S: KeyValueStore>(repo: &Repository<S>) -> Result<TrialStatus> {
    // No account means no trial.
    let status = match repo.current_user().await? {
        Some(user) => trial::evaluate_trial(user.registered_at, jiff::Timestamp::now()),
        None => TrialStatus {
            is_active: false,
            days_left: 0,
        },
    };
    Ok(status)
}

async fn ask_yes_no(prompt: &mut Prompt, question: &str) -> Result<Option<bool>> {
    loop {
        let Some(line) = prompt.ask(question).await? else {
            return Ok(None);
        };
        match line.trim().to_lowercase().as_str() {
            "y" | "ya" => return Ok(Some(true)),
            "t" | "tidak" => return Ok(Some(false)),
            _ => println!("Jawab 'y' (ya) atau 't' (tidak)."),
        }
    }
}

fn print_trial(status: TrialStatus) {
    if status.is_active {
        println!("Gratis: {}", trial::format_remaining(status.days_left));
    } else {
        println!("Masa gratis telah berakhir.");
        print_packages_hint();
    }
}

fn print_packages_hint() {
    let cheapest = PACKAGES.iter().map(|p| p.price_label()).next().unwrap_or_default();
    println!("Lanjutkan dengan paket konseling mulai {cheapest}. Lihat: konsel packages");
}

fn print_help_lines() {
    println!("Sumber bantuan:");
    for line in HELP_LINES {
        println!("  • {}: {}", line.name, line.number);
    }
}
