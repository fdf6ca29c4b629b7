// Fixed interview-domain vocabulary used by the similarity index and the
// question classifier. Versioned constant: changing it changes classifier
// behavior, so treat edits like an API change.

/// Interview-domain keywords and phrases, lower-cased, ordered. Earlier
/// entries win similarity-rating ties.
pub const INTERVIEW_VOCABULARY: &[&str] = &[
    // Question triggers
    "what",
    "how",
    "why",
    "when",
    "where",
    "who",
    "which",
    "can you",
    "could you",
    "would you",
    "do you",
    "did you",
    "explain",
    "describe",
    "tell me",
    "tell about",
    "reason",
    "use",
    "purpose",
    "need",
    "benefit",
    "scope",
    "career in",
    // Technical domains
    "react",
    "angular",
    "vue",
    "next",
    "node",
    "express",
    "mongodb",
    "firebase",
    "python",
    "java",
    "c++",
    "c#",
    "javascript",
    "typescript",
    "flutter",
    "android",
    "swift",
    "html",
    "css",
    "sass",
    "tailwind",
    "redux",
    "graphql",
    "api",
    "rest",
    "jwt",
    // CS fundamentals
    "algorithm",
    "data structure",
    "array",
    "linked list",
    "tree",
    "graph",
    "hashmap",
    "stack",
    "queue",
    "database",
    "sql",
    "nosql",
    "index",
    "normalization",
    "join",
    "query",
    "transaction",
    // Software concepts
    "oop",
    "object oriented",
    "inheritance",
    "encapsulation",
    "polymorphism",
    "abstraction",
    "design pattern",
    "solid",
    "mvc",
    "architecture",
    // DevOps & tools
    "devops",
    "docker",
    "kubernetes",
    "ci/cd",
    "git",
    "github",
    "version control",
    // Soft/HR topics
    "project",
    "internship",
    "experience",
    "skills",
    "challenge",
    "problem",
    "strength",
    "weakness",
    "goal",
    "plan",
    "teamwork",
    "communication",
    // Spoken question cues
    "difference",
    "compare",
    "vs",
    "value",
    "importance",
    "meaning",
    "overview",
    "future",
    "trending",
    "growth",
    "placement",
    "interview",
    "job role",
    "is it important",
    "should i learn",
    "what to choose",
    "can i get job with",
    // Buzzwords
    "ai",
    "ml",
    "blockchain",
    "cloud",
    "data science",
    "cybersecurity",
    "big data",
    "web development",
    "full stack",
    "frontend",
    "backend",
    "testing",
    "bug",
    "performance",
    // Casual and educational question styles
    "define",
    "definition",
    "meaning of",
    "short note",
    "explain in short",
    "full form",
    "expand",
    "elaborate",
    "what do you mean by",
    "importance of",
    "role of",
    "uses of",
    "advantages",
    "disadvantages",
    "pros",
    "cons",
    "merits",
    "demerits",
    "explain with example",
    "difference between",
    "types of",
    "list out",
    "write about",
    "note on",
    "explain briefly",
    "in detail",
    "explain in hindi",
    "explain in simple words",
    "explaination",
    "explaination of",
    "explaination in",
    "explaination about",
    "explain like this",
    "define like this",
    "define in simple words",
    "define in hindi",
    "explain with diagram",
    "explain step by step",
    "write short note",
    "write a note",
    "write answer",
    "write explanation",
    "write the answer",
    "write the explanation",
    "give example",
    "give an example",
    "give a short note",
    "give a note",
    "pros and cons",
    "advantages and disadvantages",
    "merits and demerits",
    "types",
    "kinds",
    "forms",
    "categories",
    "explain types",
    "explain kinds",
    "difference of",
    "difference in",
    "difference with",
    "difference among",
    "comparison",
    "comparison between",
    "comparison of",
    "uses",
    "applications",
    "application",
    "role",
    "future scope",
    "career scope",
    "job scope",
    "write",
    "write on",
    "write a note on",
    "note",
    "note about",
    "note in",
    "explain with points",
    "explain stepwise",
];
