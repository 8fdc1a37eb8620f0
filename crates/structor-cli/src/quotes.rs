//! Celebratory one-liners shown after a successful scaffold.

pub static SUCCESS_QUOTES: &[&str] = &[
    "🎯 Project created! Now go conquer the world!",
    "🚀 Another step toward greatness!",
    "🔥 Your project is ready. Light it up!",
    "✨ You just built the future. One folder at a time.",
    "💡 Idea scaffolded. Execution is next!",
    "🏗️ Strong foundations lead to strong empires!",
    "🧠 Great ideas start like this. Nice work!",
    "🌟 It's alive! Your project has been born!",
    "📦 All packed and ready. Time to build something amazing!",
    "💥 Creation successful. Innovation unlocked!",
    "🧰 Template deployed. Time to innovate.",
    "🔧 Your tools are set. Go build magic.",
    "🧬 Project initialized. Evolution begins now.",
    "💻 Codebase scaffolded. Welcome to your new workspace.",
    "🦾 Automation complete. You're unstoppable.",
    "🚧 Framework set. It's all yours from here.",
    "🌀 Structure dropped like a pro.",
    "🧪 System online. Begin your experiment.",
    "🎉 Files generated. Now let the fun begin!",
    "🔭 Your vision is no longer abstract.",
    "📐 Precision scaffolding: 100%.",
    "⚙️ The engine is primed. Start coding.",
    "🧱 Foundation built. Stack your ideas next.",
    "🎮 Dev mode activated. Let's play.",
    "💼 Project unpacked. Now make it yours.",
    "🎯 Precision achieved. Now go break the rules.",
    "⚡️ All systems nominal. Engage dev mode.",
    "🗺️ Map drawn. Adventure awaits.",
    "👨‍🚀 Launch sequence complete. Welcome to your codebase.",
    "🛠️ Project wired up. You're in control now.",
    "🔒 Vault opened. Secrets of structure revealed.",
    "💡 Idea manifested. Now make it legendary.",
    "📀 Code written in stone. Now etch your legacy.",
    "🎛️ Engine compiled. Drive it like you stole it.",
    "🛸 Structure landed. We are not alone.",
    "🧠 Another brainchild is born. Raise it well.",
    "📣 Hey, it actually worked. What a concept.",
    "🤖 Structor has done its duty. Don't mess it up.",
    "🥽 Project deployed. May the bugs fear you.",
    "🎨 Canvas stretched. Now splash your genius.",
    "📈 Your build stats just got better looking.",
    "🪄 That was basically magic. Don't question it.",
    "🌪️ Code whirlwind complete. Time to calm the chaos.",
    "💣 Deployed like a dev ninja. No trace left.",
    "🧩 The pieces are in place. Play the game.",
    "🧯 Build complete. Fire up the creativity.",
    "🗜️ Project compressed, deployed, and awesome-fied.",
    "🎯 Bullseye hit. Now fill it with substance.",
    "📡 Signal locked. Commence collaboration.",
    "🥷 Structor strikes again. Silently efficient.",
    "📸 Snapshot taken. Let's see what you can do.",
    "💾 Saved your time, saved your brain. You're welcome.",
    "🐍 Python'd. Bashed. React'd. Compiled. You're ready.",
    "🌍 World-class structure created. From your terminal.",
];

/// Pick one quote uniformly at random.
pub fn random_quote() -> &'static str {
    SUCCESS_QUOTES[fastrand::usize(..SUCCESS_QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_line() {
        assert_eq!(SUCCESS_QUOTES.len(), 54);
        assert!(SUCCESS_QUOTES.iter().all(|q| !q.trim().is_empty()));
    }

    #[test]
    fn random_quote_comes_from_table() {
        for _ in 0..50 {
            assert!(SUCCESS_QUOTES.contains(&random_quote()));
        }
    }
}
