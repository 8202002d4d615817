//! Built-in deployment defaults.
//!
//! The article list is the curated pregnancy-health corpus the service ships
//! with; deployments override it through `config.yml`.

pub const DEFAULT_ARTICLE_URLS: &[&str] = &[
    "https://womenshealth.gov/pregnancy/youre-pregnant-now-what/stages-pregnancy",
    "https://my.clevelandclinic.org/health/articles/7247-fetal-development-stages-of-growth",
    "https://www.mentalhealthjournal.org/articles/an-overview-of-maternal-anxiety-during-pregnancy-and-the-post-partum-period.html",
    "https://www.parents.com/pregnancy/complications/health-and-safety-issues/top-pregnancy-fears/",
    "https://my.clevelandclinic.org/health/articles/pregnancy-pains",
    "https://www.medicalnewstoday.com/articles/327385",
    "https://my.clevelandclinic.org/health/diseases/12230-birth-defects",
    "https://health.clevelandclinic.org/dyeing-your-hair-while-pregnant",
    "https://www.webmd.com/baby/dyeing-your-hair-while-pregnant-what-to-know",
    "https://utswmed.org/medblog/alcohol-during-pregnancy/",
    "https://www.nhs.uk/pregnancy/keeping-well/travelling/",
    "https://www.medicalnewstoday.com/articles/sleeping-on-the-stomach-pregnant",
    "https://pmc.ncbi.nlm.nih.gov/articles/PMC11018210/",
    "https://americanpregnancy.org/healthy-pregnancy/pregnancy-health-wellness/second-hand-smoke-and-pregnancy/",
    "https://americanpregnancy.org/healthy-pregnancy/pregnancy-health-wellness/how-air-pollution-impacts-pregnancy/",
    "https://www.cdc.gov/heat-health/hcp/clinical-overview/heat-and-pregnant-women.html",
    "https://www.pregnancybirthbaby.org.au/injuries-during-pregnancy",
    "https://pmc.ncbi.nlm.nih.gov/articles/PMC3865835/",
    "https://kjkhospital.com/breast-pain-during-pregnancy-causes-and-remedies/",
    "https://unmhealth.org/stories/2023/05/how-pregnancy-affects-heart-symptoms-when-to-call-doctor.html",
    "https://www.pregnancybirthbaby.org.au/religious-fasting-pregnancy-and-breastfeeding",
    "https://www.medicalnewstoday.com/articles/322316",
    "https://obgyn.onlinelibrary.wiley.com/doi/full/10.1002/uog.6328",
    "https://www.babycenter.com/pregnancy/health-and-safety/is-it-safe-to-get-an-x-ray-while-im-pregnant_9214",
    "https://www.ncbi.nlm.nih.gov/books/NBK279575/",
    "https://americanpregnancy.org/healthy-pregnancy/is-it-safe/saunas-and-pregnancy/",
    "https://www.medicalnewstoday.com/articles/324941",
    "https://www.parents.com/pregnancy/my-body/is-it-safe/how-to-avoid-hidden-toxins-during-pregnancy/",
    "https://www.nestdesigns.com/blogs/maternity/when-to-start-wearing-maternity-clothes-the-ultimate-guide",
];

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MAX_SOURCES: usize = 3;

pub const DEFAULT_SUMMARY_MAX_WORDS: usize = 100;

/// Low temperature keeps answers close to the retrieved context.
pub const GENERATION_TEMPERATURE: f64 = 0.1;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

pub const DEFAULT_RETRY_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 500;
