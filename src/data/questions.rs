//! The built-in question set.

use std::sync::LazyLock;

use crate::models::Question;

/// Header title shown for the built-in set.
pub const BUILTIN_TITLE: &str = "Nepali Pop Culture Quiz";

static BUILTIN_QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::new(
            "Which Nepali pop singer is known for the hit track 'Purba Paschim Rail'?",
            ["Sugam Pokharel", "Anil Singh", "Rajesh Payal Rai", "Adrian Pradhan"],
            0,
        ),
        Question::new(
            "Which Nepali band sang the famous song 'Pirati ko Mitho Tyo'?",
            ["The Axe Band", "Cobweb", "1974 AD", "Albatross"],
            0,
        ),
        Question::new(
            "Who is popularly called the 'Lok Star' in Nepal for blending pop with folk music?",
            ["Raju Lama", "Narayan Gopal", "Hemant Rana", "Prakash Saput"],
            3,
        ),
        Question::new(
            "The movie 'Kabaddi' is known for featuring which popular singer's cameo?",
            ["Pradeep Bastola", "Dayahang Rai", "Nischal Basnet", "Wilson Bikram Rai"],
            2,
        ),
        Question::new(
            "Which Nepali pop artist is known for the pop song 'Aaipugyo' featuring rap sections?",
            ["Deepesh Kishor Bhattarai", "Girish Khatiwada", "5:55", "Laure"],
            1,
        ),
        Question::new(
            "What's the name of the reality TV show that spotlights emerging bands and solo artists?",
            ["The Voice of Nepal", "Nepal Idol", "Sprite Band Challenge", "Boogie Woogie"],
            2,
        ),
        Question::new(
            "Which female pop singer soared to popularity with the hit 'Kasari Bhanu?'",
            ["Sabin Rai", "Indira Joshi", "Trishala Gurung", "Melina Rai"],
            2,
        ),
        Question::new(
            "Who is referred to as 'Nepali Shawty' on social media for her pop-rap fusion style?",
            ["Yukta Gurung", "Unnati Gurung", "Samriddhi Rai", "Astha Raut"],
            2,
        ),
        Question::new(
            "'Parkhai Ma,' a trending pop-folk track, is performed by which duo?",
            [
                "Shiva Pariyar & Ani Choying",
                "Bipul Chettri & Bartika Eam Rai",
                "Swoopna Suman & Trishna Gurung",
                "Sajan Raj Vaidya & Neetesh Jung Kunwar",
            ],
            2,
        ),
        Question::new(
            "Which Nepali pop sensation collaborated with an Indian artist on the track 'Phulbutte Sari'?",
            ["Suman Thapa", "Priyanka Karki", "Trishna Gurung", "Melina Rai"],
            3,
        ),
    ]
});

/// The built-in questions, in presentation order.
pub fn builtin_questions() -> &'static [Question] {
    &BUILTIN_QUESTIONS
}
