use speed_meeting_shared::plan::Round;
use speed_meeting_shared::result::EncounterStats;

pub fn print_schedule(rounds: &[Round]) {
    for (n, round) in rounds.iter().enumerate() {
        println!("\n=== ROUND {} ===", n + 1);
        for (m, table) in round.tables.iter().enumerate() {
            println!("Table {}: {}", m + 1, table.member_list());
        }
    }
}

pub fn print_stats(stats: &EncounterStats) {
    println!("\n=== STATISTICS ===");
    println!("Total encounters:               {}", stats.total);
    println!("Mean encounters per participant: {:.2}", stats.mean);
    println!("Min encounters per participant:  {}", stats.min);
    println!("Max encounters per participant:  {}", stats.max);
    println!("Coverage of possible encounters: {:.2}%", stats.coverage_pct);
}
