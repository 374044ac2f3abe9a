//! Preset question lists, the essay-theme taxonomy, and the fixed closing
//! lines each protocol emits when its track is exhausted.

use super::state::Track;

/// Window budget for the rendered transcript, in characters.
pub const MAX_CHAR_HISTORY: usize = 4000;

/// Window budget for the rendered transcript, in turns.
pub const MAX_TURNS: usize = 8;

/// Closed taxonomy of essay themes the classifier may tally against.
pub const THEMES: [&str; 18] = [
    "Overcoming rigid expectations & redefining success",
    "Heritage & family history as a source of purpose",
    "Immigrant / refugee identity & cultural adaptation",
    "Venturing beyond the comfort-zone (geographic or personal)",
    "Evolving concept of home & belonging",
    "Interdisciplinary curiosity - bridging disparate fields",
    "Craftsmanship / entrepreneurship as self-expression",
    "Social-justice & advocacy (racism, refugees, education equity)",
    "Leadership / mentoring younger peers",
    "Resilience in the face of personal adversity",
    "Mind-body wellbeing & self-care",
    "Intrinsic love of learning & intellectual independence",
    "Seeing patterns & connections in everyday life",
    "Purpose, legacy & impact-driven research",
    "Creativity as personal voice",
    "Embracing uncertainty & adaptability",
    "Privilege, gratitude & 'giving back'",
    "Identity & self-worth beyond external validation",
];

pub const ACADEMIC_PRESETS: [&str; 18] = [
    "What are your main academic interests? Could you tell me about three or four of your favourite subjects?",
    "Why do you like these subjects? What got you interested in them?",
    "Go subject by subject and tell me more about how you have pursued this interest recently at school or during summer school.",
    "How have you pursued this subject outside of the classroom? Have you done any internships or research projects?",
    "Is there anything about the way this subject is taught that works for you or doesn't work for you?",
    "Do any of these subjects relate to what you think you want to study at university?",
    "Do you know what you want to study at university?",
    "If you don't know, why don't you know?",
    "What do you think you want to do after you graduate? Why do you want this career?",
    "Besides those things you have mentioned already, in what other ways are you preparing yourself for this career?",
    "Why do you want to study in the United States?",
    "How much freedom do you have in choosing your university subject or your career?",
    "Do you have any intellectual interests or ideas that you are deeply absorbed in or fascinate you? Could you give me one or two examples?",
    "Tell me about each in order. Why do these fascinate you? What do you want to know more about?",
    "Have you had any obstacles or challenges in your academic life that affected your academic results?",
    "How have you dealt with these or are currently dealing with these?",
    "Has anything or anyone helped you overcome these challenges?",
    "Is there anything else about your academic interests that I haven't asked you about that you think you would like to share?",
];

pub const EXTRACURRICULAR_PRESETS: [&str; 13] = [
    "Let's start by listing your most important extracurricular activities.",
    "Is there anything else you might be forgetting? Have a look at your CV or list of activities if you'd like.",
    "Now go through each activity one by one and briefly tell me: more about how you have pursued it, and if you have a specific role in it.",
    "What you enjoy about this activity and what it brings you.",
    "Why do you do this activity, and why do you care about it?",
    "How did you hear about it and what led you to sign up?",
    "What specifically do you do? What is your role?",
    "What is your particular strength in this area, what do you in particular bring?",
    "What have you found most challenging about this work?",
    "What have you learnt about yourself and others from doing it?",
    "What have you found most rewarding about it?",
    "Do you see yourself continuing it in the future?",
    "Do you have any anecdotes about an activity that you might want to share? Anything that stands out to you?",
];

pub const BACKGROUND_PRESETS: [&str; 28] = [
    "How do your friends or people closest to you describe you?",
    "Do you agree?",
    "Which parts of your character do you like, and which parts do you wish you could change?",
    "Tell me about your family. This can be your immediate family or you can also talk about your extended family if they are important to you.",
    "Who is your favourite person in your family? Tell me more about your relationship with them.",
    "Is there anyone you clash with and why?",
    "What do you think are your family's values and do you agree with them?",
    "How would you describe your socioeconomic, national, ethnic or faith background?",
    "What does your background mean to you? Do you think this defines you or not really? And if not, why not.",
    "Have you lived in the same place your whole life, or have you moved for any reason?",
    "If you did move, was the change easy or difficult?",
    "How have the places where you have lived affected your identity?",
    "Where is home for you? How do you define home?",
    "Could you tell me a memory about home or about growing up? Something that has stuck with you over the years.",
    "What does this memory tell you about your childhood?",
    "Did your parents (or grandparents) go to university? Where? What did they study?",
    "What is your gender or sexual identity, if you feel like sharing?",
    "Is your gender or sexual identity important to you? How has it informed your perspective?",
    "Are there any obstacles you have struggled with or overcome in your personal or family life/as a community?",
    "Are you engaged with politics and/or activism or do you stay out of it?",
    "If you are engaged, what issues do you feel most passionate about?",
    "What does activism mean to you, and how have you been involved?",
    "If you stay out of politics, why is this the case and is this important to you?",
    "How has your upbringing informed who you are today and how you see your future?",
    "Do you have any worries about your future?",
    "Try to imagine yourself sitting in a small university classroom and having a discussion about your favourite subject. What perspective do you think you will bring?",
    "What, beyond academics, do you hope to gain from attending university in the US?",
    "Is there anything else that is really important to you, to your understanding of yourself or other people's understanding of you that you haven't had a chance to talk about yet?",
];

/// Fixed line emitted when every favourite subject has been walked.
pub const ACADEMIC_RAPID_CLOSING: &str =
    "Thank you. I now have enough information to move on to broader questions if you have nothing to add.";

/// Fixed line emitted when every top activity has been walked.
pub const EXTRACURRICULAR_RAPID_CLOSING: &str =
    "Thank you, that gives me a clear picture of your activities. I have enough to move on if you have nothing to add.";

/// Fixed line emitted when the background walk runs off the end of the list.
pub const BACKGROUND_CLOSING: &str =
    "Thank you for sharing all of this. That is everything I wanted to ask about your background.";

/// Fixed line emitted when the scripted academic walk runs off the end of the list.
pub const ACADEMIC_WALK_CLOSING: &str =
    "Thank you. That covers everything I wanted to ask about your academic interests.";

/// Preset list for a track, used as hints by the open-ended fallback.
pub fn presets_for(track: &Track) -> &'static [&'static str] {
    match track {
        Track::AcademicInterests => &ACADEMIC_PRESETS,
        Track::ExtracurricularActivities => &EXTRACURRICULAR_PRESETS,
        Track::FamilyBackground => &BACKGROUND_PRESETS,
        Track::Unknown(_) => &[],
    }
}
