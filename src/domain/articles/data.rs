//! Seeded article fixtures standing in for a real backend.

use once_cell::sync::Lazy;
use time::OffsetDateTime;
use time::macros::datetime;

use super::{Article, ArticleId, Author};

fn john() -> Author {
    Author::new(1, "John Doe", "john@example.com")
}

fn jane() -> Author {
    Author::new(2, "Jane Smith", "jane@example.com")
}

fn mike() -> Author {
    Author::new(3, "Mike Johnson", "mike@example.com")
}

fn seed(
    id: u64,
    title: &str,
    body: &str,
    published: bool,
    created_at: OffsetDateTime,
    author: Author,
) -> Article {
    Article::new(ArticleId(id), title, body, published, created_at, author)
        .expect("seed article is valid")
}

static SEED: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        seed(
            1,
            "Getting Started with Next.js and Prisma",
            "\
# Getting Started with Next.js and Prisma

Next.js and Prisma make a powerful combination for building modern web applications. This guide walks through everything needed to get a project off the ground.

## What is Next.js?

Next.js is a React framework that provides a lot out of the box:

- Server-side rendering for better performance and SEO
- Static site generation for blazing-fast websites
- API routes for full-stack applications
- Automatic code splitting for optimized loading

## Setting Up Your Project

### Step 1: Create the app

```bash
npx create-next-app@latest my-blog-app
cd my-blog-app
```

### Step 2: Install Prisma

```bash
npm install prisma @prisma/client
npx prisma init
```

Update your `.env` file with a connection string, then define models in `schema.prisma`.

## Best Practices

1. Use TypeScript for better type safety
2. Implement proper error handling for database operations
3. Use connection pooling in production
4. Optimize queries with include and select

With their developer-friendly APIs you can focus on building **great user experiences** while the infrastructure concerns are handled for you.",
            true,
            datetime!(2024-01-15 0:00 UTC),
            john(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=400&fit=crop")
        .with_read_time(8)
        .with_tags(["Next.js", "Prisma", "React", "Database"]),
        seed(
            2,
            "The Future of Web Development",
            "\
# The Future of Web Development

The web development landscape is constantly evolving. Let's explore the technologies that will shape the industry over the next decade.

## AI Integration

Artificial intelligence is becoming part of everyday workflows:

- AI-powered code completion
- Automated testing and bug detection
- Content generation and personalization

## Edge Computing

Moving computation closer to users brings *dramatically* lower latency, better scalability, and serverless deployment models built around edge functions.

## Web Assembly

WASM brings near-native performance to browsers, opens the platform to languages beyond JavaScript, and makes heavy client-side computation practical.

Staying curious and continuously learning will be key to thriving in this landscape.",
            true,
            datetime!(2024-01-12 0:00 UTC),
            jane(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=400&fit=crop")
        .with_read_time(6)
        .with_tags(["Web Development", "AI", "Edge Computing"]),
        seed(
            3,
            "Building Responsive UIs with Tailwind CSS",
            "\
# Building Responsive UIs with Tailwind CSS

Tailwind's utility-first approach has changed how teams style modern interfaces.

## Why Utility-First?

Instead of inventing class names, you compose designs from predefined utilities:

```html
<div class=\"bg-blue-500 text-white p-4 rounded-lg\">
  <h2 class=\"text-xl font-bold\">Card Title</h2>
</div>
```

The benefits compound quickly:

1. Faster development with no naming overhead
2. Consistent spacing and color scales
3. Smaller CSS bundles in production

## Responsive Prefixes

Breakpoint prefixes like `md:` and `lg:` make adaptive layouts declarative rather than media-query soup. Start small, experiment, and extract components with `@apply` once patterns repeat.",
            true,
            datetime!(2024-01-10 0:00 UTC),
            mike(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=400&fit=crop")
        .with_read_time(5)
        .with_tags(["CSS", "Tailwind", "Frontend"]),
        seed(
            4,
            "Database Design Best Practices",
            "\
# Database Design Best Practices

Essential principles for efficient, scalable and maintainable schemas.

## Normalization

Normalize until it hurts, then denormalize until it works. Most transactional schemas settle at **third normal form** with a few deliberate exceptions for read-heavy paths.

## Indexing Strategy

- Index the columns your queries filter and join on
- Prefer composite indexes that match query shape
- Measure before adding; every index taxes writes

A schema is a contract with your future self. Design it deliberately.",
            true,
            datetime!(2024-01-08 0:00 UTC),
            john(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=800&h=400&fit=crop")
        .with_read_time(10)
        .with_tags(["Database", "SQL", "Architecture"]),
        seed(
            5,
            "Authentication in Modern Web Apps",
            "\
# Authentication in Modern Web Apps

A tour of secure authentication: JWT tokens, OAuth flows, and the practices that keep user data safe.

## Tokens Done Right

Short-lived access tokens with rotating refresh tokens limit the blast radius of a leak. Store refresh tokens in `httpOnly` cookies, never local storage.

## Checklist

- Hash passwords with a memory-hard function
- Rate-limit login attempts
- Require verified email before privileged actions
- Log authentication events for audit

Robust authentication flows *scale with your application* rather than being bolted on afterwards.",
            true,
            datetime!(2024-01-05 0:00 UTC),
            jane(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&h=400&fit=crop")
        .with_read_time(12)
        .with_tags(["Security", "Authentication", "Web Development"]),
        seed(
            6,
            "TypeScript Tips and Tricks",
            "\
# TypeScript Tips and Tricks

Advanced techniques that make code more robust and maintainable.

## Lean on Utility Types

`Pick`, `Omit` and `Partial` remove whole categories of duplication. Discriminated unions turn runtime checks into compile-time guarantees:

```ts
type Result<T> =
  | { ok: true; value: T }
  | { ok: false; error: string };
```

Leverage the type system to catch bugs early and document intent where comments would go stale.",
            true,
            datetime!(2024-01-03 0:00 UTC),
            mike(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800&h=400&fit=crop")
        .with_read_time(7)
        .with_tags(["TypeScript", "Frontend"]),
        seed(
            7,
            "React Server Components Deep Dive",
            "\
# React Server Components Deep Dive

Server components change where rendering work happens and how much JavaScript ships to the client.

## The Mental Model

Components default to the server; interactivity opts in with `use client`. Data access moves next to the component that needs it, and the bundle only carries what must hydrate.

## Migration Strategy

1. Identify leaf components with no state or effects
2. Move data fetching into server components
3. Keep client boundaries small and explicit

The payoff is **less JavaScript** and simpler data flow, at the cost of re-learning some habits.",
            true,
            datetime!(2024-01-01 0:00 UTC),
            john(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop")
        .with_read_time(9)
        .with_tags(["React", "Performance"]),
        seed(
            8,
            "CSS Grid vs Flexbox: When to Use What",
            "\
# CSS Grid vs Flexbox: When to Use What

Two layout systems, two mental models.

## Rules of Thumb

- Flexbox distributes space along *one* axis; reach for it for toolbars, rows of cards, and centering
- Grid places items on *two* axes; reach for it for page scaffolding and anything with rows **and** columns
- They compose: grid for the shell, flexbox inside the cells

Choosing the right tool keeps markup flat and CSS short.",
            true,
            datetime!(2023-12-28 0:00 UTC),
            jane(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1545670723-196ed0954986?w=800&h=400&fit=crop")
        .with_read_time(6)
        .with_tags(["CSS", "Frontend"]),
        seed(
            9,
            "Building APIs with Node.js and Express",
            "\
# Building APIs with Node.js and Express

Routing, middleware, and error handling for production-ready backend services.

## Middleware Pipeline

Express is a pipeline of small functions. Keep each one single-purpose:

```js
app.use(requestId());
app.use(logger());
app.use(\"/api\", routes);
app.use(errorHandler());
```

## Error Handling

Centralize it. Every async handler forwards to a single error middleware that maps known failures to status codes and hides the rest behind a generic 500.",
            true,
            datetime!(2023-12-25 0:00 UTC),
            mike(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=800&h=400&fit=crop")
        .with_read_time(11)
        .with_tags(["Node.js", "API", "Backend"]),
        seed(
            10,
            "Optimizing React Performance",
            "\
# Optimizing React Performance

Techniques for lightning-fast applications.

## Measure First

Profile with the React DevTools before memoizing anything. Most slow screens have one or two hot components, not a hundred.

## The Usual Suspects

1. Unstable props defeating `memo`
2. Context values recreated every render
3. Lists without stable keys
4. Heavy work done during render instead of in effects or workers

Code splitting and lazy loading finish the job once renders are cheap.",
            true,
            datetime!(2023-12-20 0:00 UTC),
            john(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=400&fit=crop")
        .with_read_time(8)
        .with_tags(["React", "Performance"]),
        seed(
            11,
            "GraphQL vs REST: Making the Right Choice",
            "\
# GraphQL vs REST: Making the Right Choice

Understand the trade-offs before your next project commits to either.

## Where GraphQL Shines

- Many clients with different data needs
- Aggregating several backend services
- Rapidly evolving frontends

## Where REST Stays Simple

- Cacheable, resource-shaped data
- Public APIs with stable contracts
- Small teams that value boring technology

Neither is a silver bullet; the *shape of your consumers* decides.",
            true,
            datetime!(2023-12-15 0:00 UTC),
            jane(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop")
        .with_read_time(7)
        .with_tags(["GraphQL", "API", "Backend"]),
        seed(
            12,
            "Docker for Frontend Developers",
            "\
# Docker for Frontend Developers

Containers streamline frontend workflows more than most teams expect.

## A Minimal Image

```dockerfile
FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY . .
CMD [\"npm\", \"run\", \"dev\"]
```

## Why Bother

- Identical environments across the team
- Painless onboarding for new developers
- Production parity for debugging build issues

Start with the dev server, then containerize the build once the team is comfortable.",
            true,
            datetime!(2023-12-10 0:00 UTC),
            mike(),
        )
        .with_thumbnail("https://images.unsplash.com/photo-1605745341112-85968b19335a?w=800&h=400&fit=crop")
        .with_read_time(9)
        .with_tags(["Docker", "DevOps", "Frontend"]),
        seed(
            13,
            "Serverless Databases in Production",
            "\
# Serverless Databases in Production

Draft notes on operating serverless Postgres offerings under real traffic. Connection limits, cold starts, and cost cliffs all deserve their own sections before this is ready to publish.",
            false,
            datetime!(2024-01-18 0:00 UTC),
            jane(),
        )
        .with_read_time(6)
        .with_tags(["Database", "Serverless"]),
    ]
});

/// The bundled mock dataset: twelve published articles and one draft.
pub fn seed_articles() -> Vec<Article> {
    SEED.clone()
}
